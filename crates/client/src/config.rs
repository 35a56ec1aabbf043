//! Configuration types for the Clockify client.

use crate::error::Result;
use url::Url;

/// Environment variable holding the Clockify API key.
pub const API_KEY_ENV: &str = "CLOCKIFY_API_KEY";

/// Default base URL of the Clockify REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";

/// Configuration for the Clockify client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: Url,
    /// API key for authentication. A missing key is only an error once a
    /// request actually needs it, never at construction time.
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and no API key.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads `CLOCKIFY_API_KEY` once; an unset or empty variable leaves the
    /// key unset so the first upstream call reports the configuration error.
    pub fn from_env() -> Result<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Ok(Self { base_url, api_key })
    }
}
