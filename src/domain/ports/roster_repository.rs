//! RosterRepository port
//!
//! Persists the musician store. `save` always rewrites the whole store.

use crate::domain::entities::Roster;

use super::RepositoryError;

pub trait RosterRepository: Send + Sync {
    /// Load the store, creating an empty one if none exists yet.
    fn load(&self) -> Result<Roster, RepositoryError>;
    fn save(&self, roster: &Roster) -> Result<(), RepositoryError>;
}
