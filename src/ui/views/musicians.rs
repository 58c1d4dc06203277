use roster::domain::value_objects::title_case;
use roster::Musician;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn title_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| title_case(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A musician card: names title-cased, email lower-cased.
pub fn render_musician(musician: &Musician) -> String {
    format!(
        "Name: {}\nE-mail: {}\nGenres: {}\nInstruments: {}\n",
        title_case(&musician.name),
        musician.email.to_lowercase(),
        title_list(&musician.genres),
        title_list(&musician.instruments),
    )
}

pub struct SearchResultsView<'a> {
    found: &'a [Musician],
}

impl<'a> SearchResultsView<'a> {
    pub fn new(found: &'a [Musician]) -> Self {
        Self { found }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        if self.found.is_empty() {
            return format!(
                "{} {}\n",
                Icon::Registry.colored(supports_color, supports_unicode),
                ColoredText::dim("No musicians found.").render(supports_color)
            );
        }

        let mut out = format!(
            "{} {}\n",
            Icon::Registry.colored(supports_color, supports_unicode),
            ColoredText::info(format!("Musicians found (total: {}):", self.found.len()))
                .bold()
                .render(supports_color)
        );
        for musician in self.found {
            out.push('\n');
            out.push_str(&render_musician(musician));
        }
        out
    }
}

pub fn render_success(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(message).render(supports_color)
    )
}
