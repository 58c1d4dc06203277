//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod catalog;
mod roster;

pub use catalog::JsonCatalogRepository;
pub use roster::JsonRosterRepository;
