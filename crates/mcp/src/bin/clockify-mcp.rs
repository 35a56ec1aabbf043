// Standalone MCP server binary

use anyhow::Result;
use clockify_client::ClockifyClient;
use clockify_mcp::dispatch::Dispatcher;
use clockify_mcp::server::McpServer;
use clockify_mcp::tools::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Clockify MCP server starting...");

    // A missing CLOCKIFY_API_KEY is not fatal here; the first upstream call
    // reports it.
    let client = Arc::new(ClockifyClient::from_env()?);

    // Create tool registry
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ListProjectsTool::new(client.clone())));
    registry.register(Arc::new(GetTimeEntriesTool::new(client.clone())));
    registry.register(Arc::new(AddTimeEntryTool::new(client.clone())));
    registry.register(Arc::new(ListUsersTool::new(client.clone())));
    registry.register(Arc::new(GetUserTimeEntriesTool::new(client.clone())));
    registry.register(Arc::new(GetSummaryReportTool::new(client.clone())));
    registry.register(Arc::new(GetUserTimeEntriesByNameTool::new(client.clone())));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    // Start MCP server
    let server = McpServer::new(Dispatcher::new(client, registry));
    server.run().await?;

    Ok(())
}
