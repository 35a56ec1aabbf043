// MCP server: newline-delimited JSON-RPC 2.0 over stdio.

use crate::dispatch::Dispatcher;
use crate::error::DispatchError;
use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

/// MCP protocol revision implemented by this server.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server reading one JSON-RPC request per line from stdin and writing
/// one response per line to stdout. Diagnostics go to stderr via tracing.
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("MCP server listening on stdio");
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(&line).await {
                stdout.write_all(response.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }

    /// Handle one raw request line.
    ///
    /// `None` means the line was a notification and gets no response.
    pub async fn handle_message(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await?,
            Err(err) => {
                error!(error = %err, "failed to parse request");
                JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error())
            }
        };

        match serde_json::to_string(&response) {
            Ok(serialized) => Some(serialized),
            Err(err) => {
                error!(error = %err, "failed to serialize response");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.unwrap_or(serde_json::Value::Null);

        match request.method.as_str() {
            "initialize" => Some(JsonRpcResponse::success(id, self.initialize_result())),
            "ping" => Some(JsonRpcResponse::success(id, serde_json::json!({}))),
            "tools/list" => Some(JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.dispatcher.list_tools(),
                },
            )),
            "tools/call" => Some(self.handle_tool_call(id, request.params).await),
            method if method == "initialized" || method.starts_with("notifications/") => None,
            method => Some(JsonRpcResponse::error(
                id,
                JsonRpcError::method_not_found(method),
            )),
        }
    }

    async fn handle_tool_call(
        &self,
        id: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params.unwrap_or_default()) {
            Ok(params) => params,
            Err(err) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("invalid tool call params: {err}")),
                )
            }
        };

        match self.dispatcher.dispatch(&params.name, params.arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => JsonRpcResponse::error(id, rpc_error_for(&err)),
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

fn rpc_error_for(err: &DispatchError) -> JsonRpcError {
    match err {
        DispatchError::UnknownTool(_) | DispatchError::MissingArguments { .. } => {
            JsonRpcError::invalid_params(err.to_string())
        }
        _ => JsonRpcError::internal_error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{
        AddTimeEntryTool, GetSummaryReportTool, GetTimeEntriesTool, GetUserTimeEntriesByNameTool,
        GetUserTimeEntriesTool, ListProjectsTool, ListUsersTool, ToolRegistry,
    };
    use clockify_client::ClockifyClient;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(mock: &MockServer) -> McpServer {
        let client = Arc::new(
            ClockifyClient::builder()
                .base_url(mock.uri())
                .api_key("test-key")
                .build()
                .unwrap(),
        );

        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(ListProjectsTool::new(client.clone())));
        registry.register(Arc::new(GetTimeEntriesTool::new(client.clone())));
        registry.register(Arc::new(AddTimeEntryTool::new(client.clone())));
        registry.register(Arc::new(ListUsersTool::new(client.clone())));
        registry.register(Arc::new(GetUserTimeEntriesTool::new(client.clone())));
        registry.register(Arc::new(GetSummaryReportTool::new(client.clone())));
        registry.register(Arc::new(GetUserTimeEntriesByNameTool::new(client.clone())));

        McpServer::new(Dispatcher::new(client, registry))
    }

    async fn respond(server: &McpServer, request: serde_json::Value) -> serde_json::Value {
        let response = server
            .handle_message(&request.to_string())
            .await
            .expect("expected a response");
        serde_json::from_str(&response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_reports_protocol_and_server_info() {
        let mock = MockServer::start().await;
        let response = respond(
            &server_for(&mock),
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        )
        .await;

        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "clockify-mcp");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_returns_the_full_catalog() {
        let mock = MockServer::start().await;
        let response = respond(
            &server_for(&mock),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        )
        .await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 7);
        assert_eq!(tools[0]["name"], "listProjects");
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let mock = MockServer::start().await;
        let server = server_for(&mock);

        let silent = server
            .handle_message(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string())
            .await;
        assert!(silent.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let mock = MockServer::start().await;
        let response = respond(
            &server_for(&mock),
            json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}),
        )
        .await;

        assert_eq!(response["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_unparseable_line_yields_parse_error() {
        let mock = MockServer::start().await;
        let response = server_for(&mock)
            .handle_message("this is not json")
            .await
            .unwrap();
        let response: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(response["error"]["code"], -32700);
        assert_eq!(response["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_tool_call_round_trips_through_dispatch() {
        let mock = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "user1", "activeWorkspace": "ws1"})),
            )
            .mount(&mock)
            .await;
        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/projects"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": "p1", "name": "Project 1"}])),
            )
            .mount(&mock)
            .await;

        let response = respond(
            &server_for(&mock),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": {"name": "listProjects", "arguments": {}}
            }),
        )
        .await;

        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Project 1"));
    }

    #[tokio::test]
    async fn test_tool_call_validation_failure_is_invalid_params() {
        let mock = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "user1", "activeWorkspace": "ws1"})),
            )
            .mount(&mock)
            .await;

        let response = respond(
            &server_for(&mock),
            json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": {"name": "addTimeEntry", "arguments": {}}
            }),
        )
        .await;

        assert_eq!(response["error"]["code"], -32602);
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("projectId"));
        assert!(message.contains("end"));
    }
}
