//! Titled option lists
//!
//! Menus are either keyed (`[1]. Register`) or positional (`[0]. ROCK`).
//! Both render inside the same frame: a ruled title line and a closing rule
//! as wide as the title.

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::RULE;

pub(crate) fn framed(
    title: &str,
    rows: impl IntoIterator<Item = String>,
    supports_color: bool,
) -> String {
    let heading = format!("{RULE} {title} {RULE}");
    let mut out = format!(
        "{}\n",
        ColoredText::info(heading.as_str()).bold().render(supports_color)
    );
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&"-".repeat(heading.width()));
    out.push('\n');
    out
}

/// Options addressed by an explicit key, shown in the given order.
pub fn render_keyed_options(title: &str, options: &[(&str, &str)], supports_color: bool) -> String {
    framed(
        title,
        options.iter().map(|(key, label)| format!("[{key}]. {label}")),
        supports_color,
    )
}

/// Options addressed by their zero-based position.
pub fn render_indexed_options<S: AsRef<str>>(
    title: &str,
    options: &[S],
    supports_color: bool,
) -> String {
    framed(
        title,
        options
            .iter()
            .enumerate()
            .map(|(index, label)| format!("[{index}]. {}", label.as_ref())),
        supports_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_options_keep_caller_order() {
        let text = render_keyed_options("Options", &[("1", "List"), ("0", "Exit")], false);
        assert_eq!(
            text,
            "-------- Options --------\n[1]. List\n[0]. Exit\n-------------------------\n"
        );
    }

    #[test]
    fn indexed_options_count_from_zero() {
        let text = render_indexed_options("Categories", &["livros", "eletrônicos"], false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "[0]. livros");
        assert_eq!(lines[2], "[1]. eletrônicos");
    }

    #[test]
    fn closing_rule_matches_display_width() {
        let text = render_indexed_options("Gêneros", &Vec::<String>::new(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].len(), lines[0].width());
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
