// User tools.

use crate::dispatch::WorkspaceContext;
use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{optional_range, required_str};
use crate::tools::registry::{json_schema_object, json_schema_string, Tool};
use clockify_client::ClockifyClient;
use std::sync::Arc;

/// Tool listing the members of the active workspace.
pub struct ListUsersTool {
    client: Arc<ClockifyClient>,
}

impl ListUsersTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListUsersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "listUsers".to_string(),
            description: "List all users in the workspace.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        _arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let users = self.client.users().list(&ctx.workspace_id).await?;
        Ok(CallToolResult::json(&users)?)
    }
}

/// Tool listing the time entries of a user identified by ID.
pub struct GetUserTimeEntriesTool {
    client: Arc<ClockifyClient>,
}

impl GetUserTimeEntriesTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetUserTimeEntriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getUserTimeEntries".to_string(),
            description: "List time entries for a specified user. Optional: start, end (ISO8601)."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "userId": json_schema_string("User ID"),
                    "start": json_schema_string("Start date (ISO8601, optional)"),
                    "end": json_schema_string("End date (ISO8601, optional)"),
                }),
                vec!["userId"],
            ),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let user_id = required_str(&arguments, "getUserTimeEntries", "userId")?;
        let entries = self
            .client
            .time_entries()
            .list_for_user(&ctx.workspace_id, user_id, &optional_range(&arguments))
            .await?;
        Ok(CallToolResult::json(&entries)?)
    }
}

/// Tool listing the time entries of a user found by name.
///
/// The first workspace member whose name contains the given string,
/// case-insensitively, wins.
pub struct GetUserTimeEntriesByNameTool {
    client: Arc<ClockifyClient>,
}

impl GetUserTimeEntriesByNameTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetUserTimeEntriesByNameTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getUserTimeEntriesByName".to_string(),
            description: "List time entries for a user by name (case-insensitive, partial match allowed). Optional: start, end (ISO8601).".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "userName": json_schema_string("User name (partial/case-insensitive)"),
                    "start": json_schema_string("Start date (ISO8601, optional)"),
                    "end": json_schema_string("End date (ISO8601, optional)"),
                }),
                vec!["userName"],
            ),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let user_name = required_str(&arguments, "getUserTimeEntriesByName", "userName")?;
        let needle = user_name.to_lowercase();

        let users = self.client.users().list(&ctx.workspace_id).await?;
        let matched = users
            .iter()
            .find(|user| {
                user.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .ok_or_else(|| {
                DispatchError::NotFound(format!("No user found matching name: {user_name}"))
            })?;

        let entries = self
            .client
            .time_entries()
            .list_for_user(&ctx.workspace_id, &matched.id, &optional_range(&arguments))
            .await?;
        Ok(CallToolResult::json(&entries)?)
    }
}
