//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{CatalogUseCase, RosterUseCase};
use crate::config::Config;
use crate::error::RosterResult;
use crate::infrastructure::{JsonCatalogRepository, JsonRosterRepository};

/// Load the catalog named by `config` and wrap it in a use case.
///
/// The catalog is read once here; queries never touch the file again.
pub fn create_catalog_use_case(config: &Config) -> RosterResult<CatalogUseCase> {
    let repository = JsonCatalogRepository::new(&config.catalog.path);
    Ok(CatalogUseCase::load(&repository)?.with_top_n(config.catalog.top_n))
}

/// Create a roster use case backed by the configured JSON store.
pub fn create_roster_use_case(config: &Config) -> RosterUseCase {
    let repository = JsonRosterRepository::new(&config.registry.path)
        .with_atomic_writes(config.registry.atomic_writes);
    RosterUseCase::new(Arc::new(repository))
}
