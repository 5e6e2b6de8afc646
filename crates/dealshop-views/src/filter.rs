//! Client-side text filter used by store pages. Never issues a request.

use dealshop_core::Product;

/// Returns the products whose title or category contains `query`, ignoring case.
///
/// A query that is empty after trimming keeps every product. Matching uses
/// the query as typed (only lower-cased), so inner and edge spaces count.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.matches_lowercase(&needle))
        .collect()
}
