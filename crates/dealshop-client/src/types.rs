//! Response shapes that are specific to the deals backend.
//!
//! Product records themselves live in [`dealshop_core::Product`]; the
//! listing envelope is handled structurally in [`crate::normalize`] because
//! the default listing endpoint may or may not paginate.

use serde::Deserialize;

/// Body of `GET /health`, e.g. `{"status": "healthy"}`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
