use anyhow::Result;

use roster::{CatalogUseCase, SortOrder};

use super::{recover, require_terminal, Prompter};
use crate::commands::catalog::top_title;
use crate::ui::context::UiContext;
use crate::ui::views::catalog::{render_products, Extreme, ProductDetailView};
use crate::ui::views::options::render_indexed_options;

pub fn run(catalog: &CatalogUseCase, ui: &UiContext) -> Result<()> {
    require_terminal(ui)?;
    let prompt = Prompter::new(ui);

    let top_desc = top_title(SortOrder::Descending, catalog.top_n());
    let top_asc = top_title(SortOrder::Ascending, catalog.top_n());
    let options = [
        ("1", "List categories"),
        ("2", "List products of a category"),
        ("3", "Most expensive product per category"),
        ("4", "Cheapest product per category"),
        ("5", top_desc.as_str()),
        ("6", top_asc.as_str()),
        ("0", "Exit"),
    ];

    loop {
        match prompt.choose_key(&options)?.as_str() {
            "1" => {
                let categories = catalog.categories();
                print!("\n{}", render_indexed_options("Categories", &categories, ui.color));
            }
            "2" => {
                if let Some(category) = pick_category(catalog, &prompt)? {
                    let title = format!("Products in '{category}'");
                    let products = catalog.by_category(&category);
                    print!("\n{}", render_products(&title, &products, ui.color));
                }
            }
            "3" => show_extreme(catalog, &prompt, ui, Extreme::Priciest)?,
            "4" => show_extreme(catalog, &prompt, ui, Extreme::Cheapest)?,
            "5" => show_top(catalog, ui, SortOrder::Descending),
            "6" => show_top(catalog, ui, SortOrder::Ascending),
            _ => break,
        }
    }
    Ok(())
}

fn pick_category(catalog: &CatalogUseCase, prompt: &Prompter<'_>) -> Result<Option<String>> {
    let categories = catalog.categories();
    if categories.is_empty() {
        println!("The catalog has no categories.");
        return Ok(None);
    }
    let index = prompt.choose_index("Categories", &categories)?;
    Ok(Some(categories[index].to_string()))
}

fn show_extreme(
    catalog: &CatalogUseCase,
    prompt: &Prompter<'_>,
    ui: &UiContext,
    extreme: Extreme,
) -> Result<()> {
    let Some(category) = pick_category(catalog, prompt)? else {
        return Ok(());
    };
    let result = match extreme {
        Extreme::Cheapest => catalog.cheapest(&category),
        Extreme::Priciest => catalog.priciest(&category),
    };
    if let Some(product) = recover(result, ui)? {
        print!(
            "\n{}",
            ProductDetailView::new(extreme, &category, product).render(ui.color, ui.unicode)
        );
    }
    Ok(())
}

fn show_top(catalog: &CatalogUseCase, ui: &UiContext, order: SortOrder) {
    let products = catalog.top(order, None);
    print!(
        "\n{}",
        render_products(&top_title(order, catalog.top_n()), &products, ui.color)
    );
}
