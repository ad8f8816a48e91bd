//! Configuration for the viewer server.
//!
//! All configuration is loaded from environment variables. The sampling
//! range and the target generation are fixed and not configurable.

use std::time::Duration;

use pokevo_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use pokevo_core::FetchSettings;
use pokevo_web::{DEFAULT_SPRITE_BASE_URL, ServerConfig};

use crate::error::ConfigError;

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// HTTP bind address.
    pub server: ServerConfig,
    /// Species catalog connection.
    pub catalog: CatalogConfig,
    /// Fetch sequence tunables.
    pub fetch: FetchSettings,
    /// Sprite repository base URL.
    pub sprite_base_url: String,
    /// Whether to start one fetch sequence at startup.
    pub fetch_on_start: bool,
}

impl ViewerConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `POKEVO_HOST` -- bind host (default `0.0.0.0`)
    /// - `POKEVO_PORT` -- bind port (default 8080)
    /// - `POKEAPI_BASE_URL` -- catalog base URL (default `https://pokeapi.co/api/v2`)
    /// - `POKEVO_SPRITE_BASE_URL` -- sprite repository base URL
    /// - `POKEVO_MAX_ATTEMPTS` -- attempt bound per sequence (default unbounded)
    /// - `POKEVO_HTTP_TIMEOUT_MS` -- per-request timeout (default none)
    /// - `POKEVO_FETCH_ON_START` -- fetch once at startup (default `true`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let host = lookup("POKEVO_HOST").unwrap_or(defaults.host);
        let port: u16 = parse_or("POKEVO_PORT", lookup("POKEVO_PORT"), defaults.port)?;

        let base_url =
            lookup("POKEAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout_ms: Option<u64> =
            parse_optional("POKEVO_HTTP_TIMEOUT_MS", lookup("POKEVO_HTTP_TIMEOUT_MS"))?;
        let timeout = timeout_ms.map(Duration::from_millis);

        let sprite_base_url = lookup("POKEVO_SPRITE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_SPRITE_BASE_URL.to_owned());

        let max_attempts: Option<u32> =
            parse_optional("POKEVO_MAX_ATTEMPTS", lookup("POKEVO_MAX_ATTEMPTS"))?;
        if max_attempts == Some(0) {
            return Err(ConfigError::Invalid(String::from(
                "POKEVO_MAX_ATTEMPTS must be at least 1",
            )));
        }

        let fetch_on_start =
            parse_or("POKEVO_FETCH_ON_START", lookup("POKEVO_FETCH_ON_START"), true)?;

        Ok(Self {
            server: ServerConfig { host, port },
            catalog: CatalogConfig { base_url, timeout },
            fetch: FetchSettings {
                max_attempts,
                ..FetchSettings::default()
            },
            sprite_base_url,
            fetch_on_start,
        })
    }
}

/// Parse `value` as `T`, falling back to `default` when unset.
fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_optional(name, value).map(|parsed| parsed.unwrap_or(default))
}

/// Parse `value` as `T` when set.
fn parse_optional<T>(name: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::Invalid(format!("invalid {name}: {e}")))
        })
        .transpose()
}
