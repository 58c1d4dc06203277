use roster::config::ConfigWarning;
use roster::domain::ports::RepositoryError;
use roster::RosterError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Short machine-readable tag for `--json` error events.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<RosterError>() {
        Some(RosterError::Catalog(_)) => "catalog",
        Some(RosterError::Registry(_)) => "registry",
        Some(RosterError::Band(_)) => "band",
        Some(RosterError::Repository(_)) => "repository",
        Some(RosterError::InvalidConfig { .. }) => "config",
        Some(RosterError::Io(_)) => "io",
        None => "internal",
    }
}

fn fix_hint(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<RosterError>()? {
        RosterError::Repository(RepositoryError::AccessError { path, .. }) => Some(format!(
            "Check that {} exists and is readable, or pass --catalog-file / --registry-file.",
            path.display()
        )),
        RosterError::InvalidConfig { .. } => {
            Some("Fix the TOML syntax or pass --config with another file.".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "kind": error_kind(err),
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

/// One-line report used by menus, which carry on afterwards.
pub fn format_recoverable(err: &RosterError, ui: &UiContext) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(err.to_string()).render(ui.color)
    )
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} unknown config key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(
            " ({})",
            ColoredText::info(format!("did you mean '{}'?", suggestion)).render(supports_color)
        ));
    }
    out
}
