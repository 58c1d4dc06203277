//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CatalogUseCase` - Loads the product list once and answers queries
//! - `RosterUseCase` - Register, search, modify and band assembly over the store

pub mod catalog;
pub mod roster;

pub use catalog::CatalogUseCase;
pub use roster::{BandMember, RosterUseCase};
