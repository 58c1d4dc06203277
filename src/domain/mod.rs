//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Product, Musician and the Roster store
//! - `value_objects/` - Price, search filters, sort order, text normalization
//! - `services/` - Catalog queries and the band matcher
//! - `ports/` - Repository traits implemented by infrastructure
//! - `errors` - Catalog, registry and band failures

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use errors::{BandError, CatalogError, RegistryError};
