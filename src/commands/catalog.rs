use anyhow::Result;
use serde_json::json;

use roster::config::Config;
use roster::presentation::cli::CatalogCommand;
use roster::presentation::create_catalog_use_case;
use roster::SortOrder;

use crate::ui::context::UiContext;
use crate::ui::views::catalog::{render_products, Extreme, ProductDetailView};
use crate::ui::views::options::render_indexed_options;

pub fn cmd_catalog(command: CatalogCommand, config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = create_catalog_use_case(config)?;

    match command {
        CatalogCommand::Categories => {
            let categories = catalog.categories();
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "categories",
                    "categories": categories,
                }))?;
            } else {
                print!("{}", render_indexed_options("Categories", &categories, ui.color));
            }
        }
        CatalogCommand::List { category } => {
            let category = category.trim();
            let products = catalog.by_category(category);
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "products",
                    "category": category,
                    "products": crate::ui::json::products(products.iter().copied()),
                }))?;
            } else {
                let title = format!("Products in '{category}'");
                print!("{}", render_products(&title, &products, ui.color));
            }
        }
        CatalogCommand::Cheapest { category } => {
            let category = category.trim();
            let product = catalog.cheapest(category)?;
            emit_extreme(Extreme::Cheapest, category, product, ui)?;
        }
        CatalogCommand::Priciest { category } => {
            let category = category.trim();
            let product = catalog.priciest(category)?;
            emit_extreme(Extreme::Priciest, category, product, ui)?;
        }
        CatalogCommand::Top { order, limit } => {
            let products = catalog.top(order, limit);
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "top",
                    "order": order,
                    "products": crate::ui::json::products(products.iter().copied()),
                }))?;
            } else {
                let title = top_title(order, products.len());
                print!("{}", render_products(&title, &products, ui.color));
            }
        }
        CatalogCommand::Menu => super::interactive::catalog_menu::run(&catalog, ui)?,
    }

    Ok(())
}

fn emit_extreme(
    extreme: Extreme,
    category: &str,
    product: &roster::Product,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        let event = match extreme {
            Extreme::Cheapest => "cheapest",
            Extreme::Priciest => "priciest",
        };
        crate::ui::json::emit(json!({
            "event": event,
            "category": category,
            "product": crate::ui::json::product(product),
        }))?;
    } else {
        print!(
            "{}",
            ProductDetailView::new(extreme, category, product).render(ui.color, ui.unicode)
        );
    }
    Ok(())
}

pub(crate) fn top_title(order: SortOrder, n: usize) -> String {
    match order {
        SortOrder::Descending => format!("Top {n} most expensive products"),
        SortOrder::Ascending => format!("Top {n} cheapest products"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_title_follows_order() {
        assert_eq!(top_title(SortOrder::Descending, 10), "Top 10 most expensive products");
        assert_eq!(top_title(SortOrder::Ascending, 3), "Top 3 cheapest products");
    }
}
