//! Search and modification vocabulary for the musician registry
//!
//! Field names are a closed set. Anything else is rejected while the
//! filters are being built, before a single record is inspected.

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Musician;
use crate::domain::errors::RegistryError;

/// A searchable musician attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchField {
    Name,
    Email,
    Genres,
    Instruments,
}

impl SearchField {
    /// Key used in the registry file.
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::Name => "nome",
            SearchField::Email => "email",
            SearchField::Genres => "generos_musicais",
            SearchField::Instruments => "instrumentos",
        }
    }

    /// Does `musician` match `target` on this field?
    ///
    /// List fields test membership, scalar fields test equality.
    pub fn matches(&self, musician: &Musician, target: &str) -> bool {
        match self {
            SearchField::Name => musician.name == target,
            SearchField::Email => musician.email == target,
            SearchField::Genres => musician.genres.iter().any(|g| g == target),
            SearchField::Instruments => musician.instruments.iter().any(|i| i == target),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a field name is not part of the musician schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search field '{0}' (expected one of: nome, email, generos_musicais, instrumentos)")]
pub struct UnknownFieldError(pub String);

impl FromStr for SearchField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nome" | "name" => Ok(SearchField::Name),
            "email" | "e-mail" => Ok(SearchField::Email),
            "generos_musicais" | "genre" | "genres" => Ok(SearchField::Genres),
            "instrumentos" | "instrument" | "instruments" => Ok(SearchField::Instruments),
            _ => Err(UnknownFieldError(s.to_string())),
        }
    }
}

/// How multiple filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every filter must match (logical AND)
    #[default]
    Exact,
    /// At least one filter must match (logical OR)
    Any,
}

impl MatchMode {
    pub fn from_exact(exact: bool) -> Self {
        if exact {
            MatchMode::Exact
        } else {
            MatchMode::Any
        }
    }
}

/// Field → target value mapping passed to a registry search.
///
/// Each field appears at most once; inserting a field again replaces the
/// previous target. Filters keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    filters: Vec<(SearchField, String)>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: SearchField, target: impl Into<String>) -> Self {
        self.insert(field, target);
        self
    }

    pub fn insert(&mut self, field: SearchField, target: impl Into<String>) {
        let target = target.into();
        if let Some(existing) = self.filters.iter_mut().find(|(f, _)| *f == field) {
            existing.1 = target;
        } else {
            self.filters.push((field, target));
        }
    }

    /// Build filters from raw `(field name, target)` pairs.
    ///
    /// Fails with [`RegistryError::UnknownField`] on the first name outside
    /// the musician schema.
    pub fn parse<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, RegistryError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::new();
        for (key, value) in pairs {
            filters.insert(key.as_ref().parse::<SearchField>()?, value);
        }
        Ok(filters)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SearchField, &str)> {
        self.filters.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Evaluate the filters against one musician.
    pub fn matches(&self, musician: &Musician, mode: MatchMode) -> bool {
        let mut results = self.iter().map(|(field, target)| field.matches(musician, target));
        match mode {
            MatchMode::Exact => results.all(|hit| hit),
            MatchMode::Any => results.any(|hit| hit),
        }
    }
}

/// List-valued musician attribute that can be modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ListField {
    #[value(alias = "genre")]
    Genres,
    #[value(alias = "instrument")]
    Instruments,
}

impl ListField {
    pub fn key(&self) -> &'static str {
        match self {
            ListField::Genres => "generos_musicais",
            ListField::Instruments => "instrumentos",
        }
    }

    pub fn values_mut<'a>(&self, musician: &'a mut Musician) -> &'a mut Vec<String> {
        match self {
            ListField::Genres => &mut musician.genres,
            ListField::Instruments => &mut musician.instruments,
        }
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether a modification appends or removes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    Add,
    Remove,
}

impl FieldOp {
    pub fn from_add(add: bool) -> Self {
        if add {
            FieldOp::Add
        } else {
            FieldOp::Remove
        }
    }
}
