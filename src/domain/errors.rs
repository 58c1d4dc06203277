//! Domain errors
//!
//! One enum per component. The presentation layer maps these to user
//! messages; menus print them and re-prompt.

use thiserror::Error;

use super::value_objects::{ListField, UnknownFieldError};

/// Failures of catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no products found in category '{category}'")]
    EmptyCategory { category: String },
}

/// Failures of registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("email '{email}' is already registered")]
    DuplicateEmail { email: String },

    #[error("no musician registered with email '{email}'")]
    MusicianNotFound { email: String },

    #[error("at least one search filter is required")]
    EmptySearch,

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("field '{field}' cannot be left empty")]
    EmptyField { field: ListField },

    #[error("field '{field}' does not contain '{value}'")]
    ValueNotPresent { field: ListField, value: String },
}

/// Failures of band assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("a band needs at least one instrument")]
    NoSlots,

    #[error("no {genre} musician plays {instrument}")]
    NoEligibleMusician { genre: String, instrument: String },

    #[error("no band satisfies the requested {genre} line-up without repeating a musician")]
    NoValidBand { genre: String },
}
