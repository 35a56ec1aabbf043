//! Error taxonomy for tool dispatch.

/// Errors raised while routing a tool invocation.
///
/// Every variant propagates synchronously to the dispatch caller; nothing is
/// swallowed or downgraded, and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The requested tool is not in the catalog.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Required arguments are missing from the invocation.
    #[error("{tool}: missing required argument(s): {}", .fields.join(", "))]
    MissingArguments { tool: String, fields: Vec<String> },

    /// A name-based lookup matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// Serializing a tool result failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An upstream call failed.
    #[error(transparent)]
    Client(#[from] clockify_client::Error),
}
