use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for the roster CLI.
///
/// Colors and icons used by views must come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const CATALOG: &str = "🛒";
    pub const REGISTRY: &str = "🎼";
    pub const BAND: &str = "🎸";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const CATALOG: &str = "[CATALOG]";
    pub const REGISTRY: &str = "[REGISTRY]";
    pub const BAND: &str = "[BAND]";
}

/// Rule drawn around option lists and product listings.
pub const RULE: &str = "--------";

/// Prompt theme for dialoguer inputs.
///
/// The colorful theme emits ANSI sequences unconditionally, so plain
/// terminals and `--color never` get the simple one.
pub fn prompt_theme(color: bool) -> Box<dyn Theme> {
    if color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}
