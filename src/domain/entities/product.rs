//! Product entity
//!
//! Read-only catalog record. Keys follow the catalog file format.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Price, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "preco")]
    pub price: Price,
}

impl Product {
    pub fn new(id: ProductId, category: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            category: category.into(),
            price,
        }
    }
}
