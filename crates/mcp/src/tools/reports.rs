// Report tools.

use crate::dispatch::WorkspaceContext;
use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{optional_str_array, required_str};
use crate::tools::registry::{json_schema_array, json_schema_object, json_schema_string, Tool};
use clockify_client::{ClockifyClient, SummaryReportRequest};
use std::sync::Arc;

/// Tool requesting an aggregated summary report over a date range.
pub struct GetSummaryReportTool {
    client: Arc<ClockifyClient>,
}

impl GetSummaryReportTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSummaryReportTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getSummaryReport".to_string(),
            description: "Get a summary report of hours by user/project for a date range. Optional: userIds, projectIds.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "start": json_schema_string("Start date (ISO8601)"),
                    "end": json_schema_string("End date (ISO8601)"),
                    "userIds": json_schema_array(
                        serde_json::json!({"type": "string"}),
                        "Array of user IDs (optional)",
                    ),
                    "projectIds": json_schema_array(
                        serde_json::json!({"type": "string"}),
                        "Array of project IDs (optional)",
                    ),
                }),
                vec!["start", "end"],
            ),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let start = required_str(&arguments, "getSummaryReport", "start")?;
        let end = required_str(&arguments, "getSummaryReport", "end")?;

        let mut request = SummaryReportRequest::new(start, end);
        request.users = optional_str_array(&arguments, "userIds");
        request.projects = optional_str_array(&arguments, "projectIds");

        let report = self
            .client
            .reports()
            .summary(&ctx.workspace_id, &request)
            .await?;
        Ok(CallToolResult::json(&report)?)
    }
}
