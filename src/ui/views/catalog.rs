use roster::Product;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::options::framed;

pub fn product_line(index: usize, product: &Product) -> String {
    format!("[{index}]. ID: {} - R${}", product.id, product.price)
}

/// A titled, numbered product listing.
pub fn render_products(title: &str, products: &[&Product], supports_color: bool) -> String {
    if products.is_empty() {
        return framed(
            title,
            [ColoredText::dim("(no products)").render(supports_color)],
            supports_color,
        );
    }
    framed(
        title,
        products.iter().enumerate().map(|(i, p)| product_line(i, p)),
        supports_color,
    )
}

/// Which end of a category a single-product answer comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Cheapest,
    Priciest,
}

pub struct ProductDetailView<'a> {
    extreme: Extreme,
    category: &'a str,
    product: &'a Product,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(extreme: Extreme, category: &'a str, product: &'a Product) -> Self {
        Self {
            extreme,
            category,
            product,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let which = match self.extreme {
            Extreme::Cheapest => "cheapest",
            Extreme::Priciest => "priciest",
        };
        format!(
            "{} The {} product in '{}':\n\tID: {}\n\tPrice: {}\n",
            Icon::Catalog.colored(supports_color, supports_unicode),
            which,
            self.category,
            self.product.id,
            ColoredText::success(format!("R${}", self.product.price)).render(supports_color),
        )
    }
}
