//! Upstream resource shapes returned by the Clockify API.
//!
//! Only the fields this crate actually routes on are typed; everything else
//! the API returns is preserved verbatim, either in a flattened `extra` map
//! or as an opaque JSON payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The authenticated user, as returned by `GET /user`.
///
/// `id` and `active_workspace` scope every follow-up call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub active_workspace: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A workspace member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A project in a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A recorded time entry. Opaque to this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeEntry(pub Value);

/// An aggregated summary report. Opaque to this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryReport(pub Value);
