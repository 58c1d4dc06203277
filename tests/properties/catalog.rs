//! Property tests for catalog queries.

use std::collections::HashSet;

use proptest::prelude::*;

use roster::domain::services::{
    cheapest_in_category, distinct_categories, priciest_in_category, top_by_price,
};
use roster::{Price, Product, ProductId, SortOrder};

fn product() -> impl Strategy<Value = (String, u32)> {
    (prop::sample::select(vec!["livros", "games", "casa", "jardim"]), 0u32..10_000)
        .prop_map(|(category, cents)| (category.to_string(), cents))
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product(), 0..=30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (category, cents))| {
                Product::new(
                    ProductId::Number(i as i64),
                    category,
                    Price::new(f64::from(cents) / 100.0).unwrap(),
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: categories are distinct and each one comes from a product.
    #[test]
    fn property_distinct_categories(products in catalog()) {
        let categories = distinct_categories(&products);
        let unique: HashSet<&str> = categories.iter().copied().collect();

        prop_assert_eq!(unique.len(), categories.len());
        for category in &categories {
            prop_assert!(products.iter().any(|p| p.category == *category));
        }
        for p in &products {
            prop_assert!(unique.contains(p.category.as_str()));
        }
    }

    /// PROPERTY: top-N has min(N, len) items sorted in the requested direction.
    #[test]
    fn property_top_by_price_sorted_and_truncated(
        products in catalog(),
        n in 0usize..15,
        ascending in any::<bool>(),
    ) {
        let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
        let top = top_by_price(&products, n, order);

        prop_assert_eq!(top.len(), n.min(products.len()));
        for pair in top.windows(2) {
            let (a, b) = (pair[0].price.amount(), pair[1].price.amount());
            if ascending {
                prop_assert!(a <= b);
            } else {
                prop_assert!(a >= b);
            }
        }
    }

    /// PROPERTY: cheapest <= every product of the category <= priciest.
    #[test]
    fn property_extremes_bound_the_category(products in catalog()) {
        for category in distinct_categories(&products) {
            let low = cheapest_in_category(&products, category).unwrap().price.amount();
            let high = priciest_in_category(&products, category).unwrap().price.amount();
            for p in products.iter().filter(|p| p.category == category) {
                prop_assert!(low <= p.price.amount());
                prop_assert!(p.price.amount() <= high);
            }
        }
    }
}
