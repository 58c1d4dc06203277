//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_repository;
pub mod repository_error;
pub mod roster_repository;

pub use catalog_repository::CatalogRepository;
pub use repository_error::RepositoryError;
pub use roster_repository::RosterRepository;
