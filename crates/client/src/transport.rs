//! HTTP transport layer for the Clockify client.

use crate::config::{ClientConfig, API_KEY_ENV};
use crate::error::{Error, Result};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

/// Header carrying the Clockify API key.
const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP transport for making Clockify API requests.
///
/// Single choke point for all outbound calls: every request resolves the
/// credential, and every non-success response is normalized into
/// [`Error::Api`] with the status code and raw body text.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    ///
    /// Absolute URLs are used as-is; everything else is appended to the
    /// configured base URL.
    fn build_url(&self, path: &str) -> Result<url::Url> {
        if path.starts_with("http") {
            return Ok(url::Url::parse(path)?);
        }
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Ok(url::Url::parse(&format!("{base}{path}"))?)
    }

    /// Resolve the API key, failing the call if none is configured.
    fn api_key(&self) -> Result<&str> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::Config(format!("{API_KEY_ENV} is not set"))),
        }
    }

    /// Attach auth headers, send, and decode the response.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let mut request = builder.header(API_KEY_HEADER, self.api_key()?).build()?;
        request
            .headers_mut()
            .entry(header::CONTENT_TYPE)
            .or_insert(header::HeaderValue::from_static("application/json"));
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Clockify API request failed"
            );
            return Err(Error::from_response(status.as_u16(), &body));
        }

        Ok(response.json().await?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        self.send(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        self.send(self.client.get(url).query(query)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        self.send(self.client.post(url).json(body)).await
    }
}
