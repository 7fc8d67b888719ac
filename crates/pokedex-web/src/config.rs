//! Configuration for the web server.
//!
//! All configuration is loaded from environment variables. Every variable
//! is optional; the defaults talk to the public `PokeAPI` and listen on
//! `0.0.0.0:8080`.

use std::time::Duration;

use pokedex_resolver::{DEFAULT_API_BASE, SourceConfig};

use crate::server::ServerConfig;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Name of the offending variable.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Complete web server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Root of the REST API entity lookups are built under.
    pub api_base: String,
    /// Bind address and port.
    pub server: ServerConfig,
    /// Outbound HTTP client settings.
    pub source: SourceConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            server: ServerConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `POKEDEX_API_BASE` -- REST API root (default `https://pokeapi.co/api/v2`)
    /// - `POKEDEX_HOST` -- bind host (default `0.0.0.0`)
    /// - `POKEDEX_PORT` -- bind port (default `8080`)
    /// - `POKEDEX_REQUEST_TIMEOUT_MS` -- per-request timeout; unset waits indefinitely
    /// - `POKEDEX_USER_AGENT` -- outbound `User-Agent` header
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let api_base = get("POKEDEX_API_BASE").unwrap_or(defaults.api_base);
        let host = get("POKEDEX_HOST").unwrap_or(defaults.server.host);

        let port = match get("POKEDEX_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "POKEDEX_PORT",
                reason: e.to_string(),
            })?,
            None => defaults.server.port,
        };

        let request_timeout = match get("POKEDEX_REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "POKEDEX_REQUEST_TIMEOUT_MS",
                    reason: e.to_string(),
                })?;
                if millis == 0 {
                    return Err(ConfigError::Invalid {
                        name: "POKEDEX_REQUEST_TIMEOUT_MS",
                        reason: String::from("must be greater than zero"),
                    });
                }
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        let user_agent = get("POKEDEX_USER_AGENT").unwrap_or(defaults.source.user_agent);

        Ok(Self {
            api_base,
            server: ServerConfig { host, port },
            source: SourceConfig {
                user_agent,
                request_timeout,
            },
        })
    }
}
