pub mod app_config;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, Environment, DEFAULT_API_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Product, Store};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown store tag: {0} (expected one of Flipkart, myntra, meesho)")]
    UnknownStore(String),
}
