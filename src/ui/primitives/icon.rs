use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Catalog,
    Registry,
    Band,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Catalog => (icons::CATALOG, icons_ascii::CATALOG),
            Icon::Registry => (icons::REGISTRY, icons_ascii::REGISTRY),
            Icon::Band => (icons::BAND, icons_ascii::BAND),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Catalog | Icon::Registry | Icon::Band => theme::colors::INFO,
        };
        s.with(color).to_string()
    }
}
