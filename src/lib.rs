//! Roster - product catalog queries and a musician registry
//!
//! Two independent components share this crate:
//!
//! - the catalog, a read-only product list answering category and price queries
//! - the registry, a JSON-backed musician store with search, modification and
//!   a band matcher that enumerates every valid line-up for a genre

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BandMember, CatalogUseCase, RosterUseCase};
pub use config::Config;
pub use domain::entities::{Musician, Product, Roster};
pub use domain::value_objects::{
    FieldOp, ListField, MatchMode, Price, ProductId, SearchField, SearchFilters, SortOrder,
};
pub use domain::{BandError, CatalogError, RegistryError};
pub use error::{RosterError, RosterResult};
