//! Catalog queries
//!
//! Pure functions over a product slice. Results borrow from the input and
//! preserve source order wherever ordering is not the point of the query.

use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;
use crate::domain::value_objects::SortOrder;

/// Number of products returned by the top-N rankings unless configured.
pub const DEFAULT_TOP_N: usize = 10;

/// Distinct categories in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }
    categories
}

/// Products whose category equals `category` exactly.
pub fn products_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}

/// Cheapest product of a category. Ties go to the first one listed.
pub fn cheapest_in_category<'a>(
    products: &'a [Product],
    category: &str,
) -> Result<&'a Product, CatalogError> {
    sorted_by_price(products_by_category(products, category))
        .first()
        .copied()
        .ok_or_else(|| empty_category(category))
}

/// Most expensive product of a category. Ties go to the last one listed.
pub fn priciest_in_category<'a>(
    products: &'a [Product],
    category: &str,
) -> Result<&'a Product, CatalogError> {
    sorted_by_price(products_by_category(products, category))
        .last()
        .copied()
        .ok_or_else(|| empty_category(category))
}

/// The first `min(n, len)` products ranked by price.
///
/// The sort is stable in both directions: products with equal prices keep
/// their catalog order.
pub fn top_by_price(products: &[Product], n: usize, order: SortOrder) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    match order {
        SortOrder::Ascending => ranked.sort_by(|a, b| a.price.compare(&b.price)),
        SortOrder::Descending => ranked.sort_by(|a, b| b.price.compare(&a.price)),
    }
    ranked.truncate(n);
    ranked
}

fn sorted_by_price(mut products: Vec<&Product>) -> Vec<&Product> {
    products.sort_by(|a, b| a.price.compare(&b.price));
    products
}

fn empty_category(category: &str) -> CatalogError {
    CatalogError::EmptyCategory {
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Price, ProductId};

    fn product(id: i64, category: &str, price: f64) -> Product {
        Product::new(ProductId::Number(id), category, Price::new(price).unwrap())
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "livros", 30.0),
            product(2, "games", 250.0),
            product(3, "livros", 12.5),
            product(4, "games", 99.9),
            product(5, "audio", 400.0),
            product(6, "livros", 30.0),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let products = catalog();
        assert_eq!(
            distinct_categories(&products),
            vec!["livros", "games", "audio"]
        );
    }

    #[test]
    fn products_by_category_keeps_source_order() {
        let products = catalog();
        assert_eq!(
            ids(&products_by_category(&products, "livros")),
            vec!["1", "3", "6"]
        );
        assert!(products_by_category(&products, "Livros").is_empty());
    }

    #[test]
    fn cheapest_and_priciest_per_category() {
        let products = catalog();
        assert_eq!(
            cheapest_in_category(&products, "livros").unwrap().id,
            ProductId::Number(3)
        );
        assert_eq!(
            priciest_in_category(&products, "games").unwrap().id,
            ProductId::Number(2)
        );
    }

    #[test]
    fn priciest_tie_goes_to_last_listed() {
        let products = catalog();
        assert_eq!(
            priciest_in_category(&products, "livros").unwrap().id,
            ProductId::Number(6)
        );
    }

    #[test]
    fn extremum_of_empty_category_is_an_error() {
        let products = catalog();
        let err = cheapest_in_category(&products, "moveis").unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyCategory {
                category: "moveis".to_string()
            }
        );
        assert!(priciest_in_category(&[], "moveis").is_err());
    }

    #[test]
    fn top_by_price_descending_and_ascending() {
        let products = catalog();
        assert_eq!(
            ids(&top_by_price(&products, 3, SortOrder::Descending)),
            vec!["5", "2", "4"]
        );
        assert_eq!(
            ids(&top_by_price(&products, 3, SortOrder::Ascending)),
            vec!["3", "1", "6"]
        );
    }

    #[test]
    fn top_by_price_returns_whole_collection_when_smaller() {
        let products = catalog();
        let top = top_by_price(&products, DEFAULT_TOP_N, SortOrder::Descending);
        assert_eq!(top.len(), products.len());
    }

    #[test]
    fn string_prices_sort_numerically() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "categoria": "a", "preco": "9.90"},
                {"id": 2, "categoria": "a", "preco": "100"},
                {"id": 3, "categoria": "a", "preco": 20}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            ids(&top_by_price(&products, 10, SortOrder::Descending)),
            vec!["2", "3", "1"]
        );
    }
}
