//! Catalog Use Case
//!
//! Loads the product list once and answers queries against it.

use crate::domain::entities::Product;
use crate::domain::ports::CatalogRepository;
use crate::domain::services::{self, DEFAULT_TOP_N};
use crate::domain::value_objects::SortOrder;
use crate::error::RosterResult;

pub struct CatalogUseCase {
    products: Vec<Product>,
    top_n: usize,
}

impl CatalogUseCase {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn load(repository: &dyn CatalogRepository) -> RosterResult<Self> {
        Ok(Self::new(repository.load()?))
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> Vec<&str> {
        services::distinct_categories(&self.products)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        services::products_by_category(&self.products, category)
    }

    pub fn cheapest(&self, category: &str) -> RosterResult<&Product> {
        Ok(services::cheapest_in_category(&self.products, category)?)
    }

    pub fn priciest(&self, category: &str) -> RosterResult<&Product> {
        Ok(services::priciest_in_category(&self.products, category)?)
    }

    /// Top-N ranking using the configured N unless `limit` overrides it.
    pub fn top(&self, order: SortOrder, limit: Option<usize>) -> Vec<&Product> {
        services::top_by_price(&self.products, limit.unwrap_or(self.top_n), order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RepositoryError;
    use crate::domain::value_objects::{Price, ProductId};
    use crate::error::RosterError;

    struct StaticCatalog(Vec<Product>);

    impl CatalogRepository for StaticCatalog {
        fn load(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    fn products(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|i| {
                Product::new(
                    ProductId::Number(i),
                    if i % 2 == 0 { "par" } else { "impar" },
                    Price::new(i as f64).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn top_defaults_to_ten() {
        let use_case = CatalogUseCase::load(&StaticCatalog(products(15))).unwrap();
        let top = use_case.top(SortOrder::Descending, None);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].id, ProductId::Number(15));
    }

    #[test]
    fn top_respects_configured_and_explicit_limits() {
        let use_case = CatalogUseCase::new(products(15)).with_top_n(3);
        assert_eq!(use_case.top(SortOrder::Ascending, None).len(), 3);
        assert_eq!(use_case.top(SortOrder::Ascending, Some(5)).len(), 5);
    }

    #[test]
    fn extremum_on_unknown_category_is_catalog_error() {
        let use_case = CatalogUseCase::new(products(4));
        let err = use_case.cheapest("nenhuma").unwrap_err();
        assert!(matches!(err, RosterError::Catalog(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn categories_follow_first_appearance() {
        let use_case = CatalogUseCase::new(products(4));
        assert_eq!(use_case.categories(), vec!["impar", "par"]);
        assert_eq!(use_case.priciest("par").unwrap().id, ProductId::Number(4));
    }
}
