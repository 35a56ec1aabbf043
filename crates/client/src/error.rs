//! Error types for the Clockify client.

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when calling the Clockify API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success response.
    ///
    /// Carries the raw body text so the caller can diagnose the failure
    /// without another round trip.
    #[error("Clockify API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an API error from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            body: body.to_string(),
        }
    }
}
