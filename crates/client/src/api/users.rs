//! Users API endpoints.

use crate::client::ClockifyClient;
use crate::error::Result;
use crate::types::{CurrentUser, User};

/// Users API for identity resolution and workspace membership.
pub struct UsersApi<'a> {
    client: &'a ClockifyClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ClockifyClient) -> Self {
        Self { client }
    }

    /// Fetch the authenticated user.
    pub async fn current(&self) -> Result<CurrentUser> {
        self.client.http.get("/user").await
    }

    /// List all users in a workspace.
    pub async fn list(&self, workspace_id: &str) -> Result<Vec<User>> {
        self.client
            .http
            .get(&format!("/workspaces/{workspace_id}/users"))
            .await
    }
}
