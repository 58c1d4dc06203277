//! CatalogRepository port
//!
//! Source of the read-only product list.

use crate::domain::entities::Product;

use super::RepositoryError;

pub trait CatalogRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, RepositoryError>;
}
