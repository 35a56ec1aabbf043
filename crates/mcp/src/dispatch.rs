// Dispatch pipeline: identity resolution, catalog lookup, validation,
// execution.

use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{validate_required, ToolRegistry};
use clockify_client::{ClockifyClient, CurrentUser};
use std::sync::Arc;
use tracing::debug;

/// Identity context scoping every upstream call.
///
/// Re-derived on each dispatched invocation; never cached across calls.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    pub workspace_id: String,
    pub user_id: String,
}

impl From<CurrentUser> for WorkspaceContext {
    fn from(user: CurrentUser) -> Self {
        Self {
            workspace_id: user.active_workspace,
            user_id: user.id,
        }
    }
}

/// Routes tool invocations to the registered tools.
pub struct Dispatcher {
    client: Arc<ClockifyClient>,
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(client: Arc<ClockifyClient>, registry: ToolRegistry) -> Self {
        Self { client, registry }
    }

    /// The full tool catalog, in registration order. No I/O.
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_schemas()
    }

    /// Route one invocation.
    ///
    /// The identity context is fetched first on every call, before the
    /// catalog lookup and even for tools that never read it: workspace and
    /// user identity are treated as call-scoped, not session-scoped.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, DispatchError> {
        let ctx: WorkspaceContext = self.client.users().current().await?.into();

        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        validate_required(&tool.schema(), &arguments)?;

        debug!(tool = name, workspace = %ctx.workspace_id, "dispatching tool call");
        tool.execute(&ctx, arguments).await
    }
}
