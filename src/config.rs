//! Process configuration, read once at startup.
//!
//! All knobs come from the environment:
//!   SHOWROOM_PASSWORD -- shared operator password (unset = logins fail closed)
//!   SHOWROOM_API_URL  -- inventory backend base URL
//!   SHOWROOM_ENV      -- "production" marks the session cookie Secure
//!   SHOWROOM_BIND     -- listen address
//!
//! The resulting Config is immutable and injected into the router state;
//! nothing else in the crate reads the environment.

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Operator password. `None` when unset or empty; authentication then
    /// reports a server configuration error instead of "wrong password".
    pub password: Option<String>,
    /// Inventory backend base URL, trailing slashes stripped.
    pub api_base: String,
    /// Whether the session cookie is restricted to encrypted transport.
    pub production: bool,
    /// Listen address for the HTTP server.
    pub bind: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SHOWROOM_API_URL is not a valid URL ({value}): {source}")]
    InvalidApiUrl {
        value: String,
        source: url::ParseError,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let password = std::env::var("SHOWROOM_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let api_base = std::env::var("SHOWROOM_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if let Err(source) = Url::parse(&api_base) {
            return Err(ConfigError::InvalidApiUrl {
                value: api_base,
                source,
            });
        }

        let production = std::env::var("SHOWROOM_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let bind = std::env::var("SHOWROOM_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

        Ok(Self {
            password,
            api_base,
            production,
            bind,
        })
    }
}
