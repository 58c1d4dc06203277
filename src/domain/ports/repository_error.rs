//! Errors shared by the file-backed repositories

use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("failed to access {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("failed to serialize {path}: {message}")]
    SerializationError { path: PathBuf, message: String },

    #[error(
        "data file corrupted: {path}\n  → Fix: correct the JSON by hand or restore a backup\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
