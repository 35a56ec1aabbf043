//! Main client for the Clockify API.

use crate::api::{ProjectsApi, ReportsApi, TimeEntriesApi, UsersApi};
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::Result;
use crate::transport::HttpTransport;
use std::sync::Arc;
use url::Url;

/// Client for the Clockify REST API.
///
/// Cheap to clone; all clones share one underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ClockifyClient {
    pub(crate) http: HttpTransport,
}

impl ClockifyClient {
    /// Create a new client builder.
    pub fn builder() -> ClockifyClientBuilder {
        ClockifyClientBuilder::new()
    }

    /// Build a client from the process environment.
    ///
    /// A missing `CLOCKIFY_API_KEY` is not an error here; it surfaces on the
    /// first request instead.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> Result<Self> {
        let http = HttpTransport::new(Arc::new(config))?;
        Ok(Self { http })
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the time entries API.
    pub fn time_entries(&self) -> TimeEntriesApi<'_> {
        TimeEntriesApi::new(self)
    }

    /// Get the reports API.
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }
}

/// Builder for creating a [`ClockifyClient`].
pub struct ClockifyClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ClockifyClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
        }
    }

    /// Override the base URL of the Clockify API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ClockifyClient> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key,
        };

        ClockifyClient::from_config(config)
    }
}

impl Default for ClockifyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
