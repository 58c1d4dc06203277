//! Domain Entities
//!
//! - `Product` - A catalog record (read-only)
//! - `Musician` - A registered musician, keyed by email
//! - `Roster` - The musician store, rewritten wholesale on every mutation

mod musician;
mod product;
mod roster;

pub use musician::Musician;
pub use product::Product;
pub use roster::Roster;
