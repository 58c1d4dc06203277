//! Error types for Roster
//!
//! Uses `thiserror` for library errors. Domain failures keep their own enums
//! and are wrapped here so callers can handle everything through one type.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::domain::{BandError, CatalogError, RegistryError};

/// Result type alias for Roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Band(#[from] BandError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Domain failures are reported and the menu carries on; anything else
    /// (unreadable or corrupt data files) ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::Catalog(_) | RosterError::Registry(_) | RosterError::Band(_)
        )
    }
}
