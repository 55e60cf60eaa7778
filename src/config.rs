//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `SHOPPING_LISTS_BIND` | `0.0.0.0:8080` |
//! | `SHOPPING_LISTS_CORS_ORIGINS` | `http://localhost:5173` (comma separated) |
//! | `SHOPPING_LISTS_LOG_JSON` | `false` |
//!
//! Log levels come from `RUST_LOG`.

use std::env;

pub const BIND_VAR: &str = "SHOPPING_LISTS_BIND";
pub const CORS_ORIGINS_VAR: &str = "SHOPPING_LISTS_CORS_ORIGINS";
pub const LOG_JSON_VAR: &str = "SHOPPING_LISTS_LOG_JSON";

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Emit logs as JSON lines instead of the human format.
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable lookup. Unset or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind = lookup(BIND_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind);

        let cors_origins = lookup(CORS_ORIGINS_VAR)
            .map(|v| parse_list(&v))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        let log_json = lookup(LOG_JSON_VAR)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.log_json);

        Self {
            bind,
            cors_origins,
            log_json,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
