//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs` - Atomic and direct file writes
//! - `repositories/` - JSON catalog and roster repositories

pub mod fs;
pub mod repositories;

pub use repositories::{JsonCatalogRepository, JsonRosterRepository};
