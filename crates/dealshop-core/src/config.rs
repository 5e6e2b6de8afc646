use crate::app_config::{AppConfig, Environment, DEFAULT_API_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, raw: &str| -> Result<u64, ConfigError> {
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url =
        normalize_base_url(&or_default("DEALSHOP_API_BASE_URL", DEFAULT_API_BASE_URL))?;
    let env = parse_environment(&or_default("DEALSHOP_ENV", "development"))?;
    let log_level = or_default("DEALSHOP_LOG_LEVEL", "info");

    let request_timeout_secs = match lookup("DEALSHOP_REQUEST_TIMEOUT_SECS") {
        Ok(raw) if !raw.trim().is_empty() => {
            Some(parse_u64("DEALSHOP_REQUEST_TIMEOUT_SECS", raw.trim())?)
        }
        _ => None,
    };

    let user_agent = or_default("DEALSHOP_USER_AGENT", "dealshop/0.1 (storefront-client)");
    let search_debounce_ms = parse_u64(
        "DEALSHOP_SEARCH_DEBOUNCE_MS",
        &or_default("DEALSHOP_SEARCH_DEBOUNCE_MS", "300"),
    )?;

    Ok(AppConfig {
        api_base_url,
        env,
        log_level,
        request_timeout_secs,
        user_agent,
        search_debounce_ms,
    })
}

/// Strip trailing separators so endpoint paths can be appended verbatim.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "DEALSHOP_API_BASE_URL".to_string(),
            reason: "base URL must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEALSHOP_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
