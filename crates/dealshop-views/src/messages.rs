//! User-facing copy for failed fetches. The underlying error is logged, never shown.

/// Initial page load failed.
pub const LOAD_FAILED: &str = "Failed to load products. Please try again later.";

/// A debounced search request failed.
pub const SEARCH_FAILED: &str = "Failed to search products.";

/// Reloading the full catalog after the search box was cleared failed.
pub const RELOAD_FAILED: &str = "Failed to load products.";
