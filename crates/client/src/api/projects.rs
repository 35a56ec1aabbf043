//! Projects API endpoints.

use crate::client::ClockifyClient;
use crate::error::Result;
use crate::types::Project;

/// Projects API for listing workspace projects.
pub struct ProjectsApi<'a> {
    client: &'a ClockifyClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ClockifyClient) -> Self {
        Self { client }
    }

    /// List all projects in a workspace.
    pub async fn list(&self, workspace_id: &str) -> Result<Vec<Project>> {
        self.client
            .http
            .get(&format!("/workspaces/{workspace_id}/projects"))
            .await
    }
}
