// Project tools.

use crate::dispatch::WorkspaceContext;
use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{json_schema_object, Tool};
use clockify_client::ClockifyClient;
use std::sync::Arc;

/// Tool listing the projects of the active workspace.
pub struct ListProjectsTool {
    client: Arc<ClockifyClient>,
}

impl ListProjectsTool {
    pub fn new(client: Arc<ClockifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListProjectsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "listProjects".to_string(),
            description: "List all projects for the authenticated user.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        ctx: &WorkspaceContext,
        _arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let projects = self.client.projects().list(&ctx.workspace_id).await?;
        Ok(CallToolResult::json(&projects)?)
    }
}
