//! Page-level controllers for the storefront.
//!
//! Each page owns a [`ViewState`] published on a `tokio::sync::watch`
//! channel. User actions and fetch outcomes become [`PageIntent`]s, and
//! [`PageReducer`] is the only place state changes:
//!
//! ```text
//! action ──→ fetch (ProductSource) ──→ PageIntent ──→ PageReducer ──→ ViewState ──→ view
//! ```
//!
//! - [`CatalogPage`] loads the full catalog on mount and re-queries the
//!   backend on debounced search input.
//! - [`StorePage`] loads one store's products on mount and filters them
//!   locally.

mod catalog;
mod dispatch;
pub mod filter;
pub mod messages;
mod reducer;
mod state;
mod store_page;

pub use catalog::{CatalogPage, DEFAULT_SEARCH_DEBOUNCE};
pub use filter::filter_products;
pub use reducer::{PageIntent, PageReducer};
pub use state::{Phase, ViewState};
pub use store_page::StorePage;
