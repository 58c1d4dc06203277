//! JSON Catalog Repository
//!
//! Reads the product list from a JSON array file. There is no write path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Product;
use crate::domain::ports::{CatalogRepository, RepositoryError};

pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let content = fs::read_to_string(&self.path).map_err(|e| RepositoryError::AccessError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(
            path = %self.path.display(),
            products = products.len(),
            "catalog loaded"
        );
        Ok(products)
    }
}
