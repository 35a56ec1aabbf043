// MCP (Model Context Protocol) server for the Clockify time-tracking API.
// Exposes a fixed catalog of Clockify operations as tools to agent clients.

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use dispatch::{Dispatcher, WorkspaceContext};
pub use error::DispatchError;
pub use server::McpServer;
