// Time entry tools.

use crate::dispatch::WorkspaceContext;
use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{optional_range, required_str};
use crate::tools::registry::{json_schema_object, json_schema_string, Tool};
use clockify_client::{ClockifyClient, NewTimeEntry};
use std::sync::Arc;

/// Tool listing the authenticated user's own time entries.
pub struct GetTimeEntriesTool {
    client: Arc<ClockifyClient>,
}

impl GetTimeEntriesTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTimeEntriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getTimeEntries".to_string(),
            description: "List time entries for the authenticated user. Optional: start, end (ISO8601).".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "start": json_schema_string("Start date (ISO8601, optional)"),
                    "end": json_schema_string("End date (ISO8601, optional)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let entries = self
            .client
            .time_entries()
            .list_for_user(&ctx.workspace_id, &ctx.user_id, &optional_range(&arguments))
            .await?;
        Ok(CallToolResult::json(&entries)?)
    }
}

/// Tool recording a new time entry against a project.
pub struct AddTimeEntryTool {
    client: Arc<ClockifyClient>,
}

impl AddTimeEntryTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for AddTimeEntryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "addTimeEntry".to_string(),
            description: "Add a time entry to a project.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "projectId": json_schema_string("Clockify project ID"),
                    "description": json_schema_string("Description of the time entry"),
                    "start": json_schema_string("Start time (ISO8601)"),
                    "end": json_schema_string("End time (ISO8601)"),
                }),
                vec!["projectId", "description", "start", "end"],
            ),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let entry = NewTimeEntry {
            start: required_str(&arguments, "addTimeEntry", "start")?.to_string(),
            end: required_str(&arguments, "addTimeEntry", "end")?.to_string(),
            description: required_str(&arguments, "addTimeEntry", "description")?.to_string(),
            project_id: required_str(&arguments, "addTimeEntry", "projectId")?.to_string(),
        };

        let created = self
            .client
            .time_entries()
            .create(&ctx.workspace_id, &entry)
            .await?;
        Ok(CallToolResult::json(&created)?)
    }
}
