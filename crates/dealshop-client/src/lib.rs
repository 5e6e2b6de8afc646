pub mod client;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::ApiClient;
pub use error::ClientError;
pub use normalize::normalize_listing;
pub use source::ProductSource;
pub use types::HealthResponse;
