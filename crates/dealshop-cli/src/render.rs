//! Plain-text product cards for the terminal.

use std::fmt::Write as _;

use dealshop_core::Product;
use dealshop_views::ViewState;

pub(crate) const LOADING: &str = "Loading products...";
pub(crate) const EMPTY: &str = "No products found. Try adjusting your filters.";

/// `Showing 1 product` / `Showing 3 products`.
pub(crate) fn count_line(count: usize) -> String {
    let noun = if count == 1 { "product" } else { "products" };
    format!("Showing {count} {noun}")
}

pub(crate) fn render_card(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", product.id, product.title);
    let _ = writeln!(
        out,
        "    {} | {} | {}",
        product.price,
        product.store.display_name(),
        product.category
    );
    let _ = writeln!(out, "    Buy: {}", product.affiliate_link);
    out
}

/// Count line followed by one card per product, or the empty-state copy.
pub(crate) fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{EMPTY}\n");
    }

    let mut out = count_line(products.len());
    out.push('\n');
    for product in products {
        out.push_str(&render_card(product));
    }
    out
}

pub(crate) fn render_state(state: &ViewState) -> String {
    if state.loading {
        return format!("{LOADING}\n");
    }
    if let Some(error) = &state.error {
        return format!("{error}\n");
    }
    render_products(&state.products)
}

/// Whether two states would render differently. Typing alone does not count.
pub(crate) fn visibly_differs(a: &ViewState, b: &ViewState) -> bool {
    a.loading != b.loading || a.error != b.error || a.products != b.products
}
