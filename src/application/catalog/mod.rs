//! Catalog application module

mod use_case;

pub use use_case::CatalogUseCase;
