/// Backend used when `DEALSHOP_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://fullstack-dealshop2.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL with any trailing `/` already stripped.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    /// Per-request timeout. `None` means requests may wait indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub search_debounce_ms: u64,
}
