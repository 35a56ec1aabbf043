//! Time entry API endpoints.

use crate::client::ClockifyClient;
use crate::error::Result;
use crate::types::TimeEntry;
use serde::{Deserialize, Serialize};

/// Optional date range bounds for time-entry queries.
///
/// A bound is sent only when it is a non-empty string; when neither bound is
/// set, no query string is appended at all.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TimeEntryRange {
    fn query(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(start) = self.start.as_deref().filter(|s| !s.is_empty()) {
            params.push(("start", start));
        }
        if let Some(end) = self.end.as_deref().filter(|s| !s.is_empty()) {
            params.push(("end", end));
        }
        params
    }
}

/// Request body for creating a time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: String,
    pub end: String,
    pub description: String,
    pub project_id: String,
}

/// Time entries API for listing and recording worked time.
pub struct TimeEntriesApi<'a> {
    client: &'a ClockifyClient,
}

impl<'a> TimeEntriesApi<'a> {
    pub(crate) fn new(client: &'a ClockifyClient) -> Self {
        Self { client }
    }

    /// List the time entries recorded by a user, optionally bounded by
    /// `range`.
    pub async fn list_for_user(
        &self,
        workspace_id: &str,
        user_id: &str,
        range: &TimeEntryRange,
    ) -> Result<Vec<TimeEntry>> {
        let path = format!("/workspaces/{workspace_id}/user/{user_id}/time-entries");
        let params = range.query();
        if params.is_empty() {
            self.client.http.get(&path).await
        } else {
            self.client.http.get_with_query(&path, &params).await
        }
    }

    /// Record a new time entry.
    pub async fn create(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry> {
        self.client
            .http
            .post(&format!("/workspaces/{workspace_id}/time-entries"), entry)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClockifyClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ClockifyClient {
        ClockifyClient::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_range_with_only_start_sends_one_param() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/user/u1/time-entries"))
            .and(query_param("start", "2024-01-01T00:00:00Z"))
            .and(query_param_is_missing("end"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let range = TimeEntryRange {
            start: Some("2024-01-01T00:00:00Z".to_string()),
            end: None,
        };
        let entries = client(&server)
            .time_entries()
            .list_for_user("ws1", "u1", &range)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_range_with_both_bounds_sends_both_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/user/u1/time-entries"))
            .and(query_param("start", "2024-01-01T00:00:00Z"))
            .and(query_param("end", "2024-01-31T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let range = TimeEntryRange {
            start: Some("2024-01-01T00:00:00Z".to_string()),
            end: Some("2024-01-31T00:00:00Z".to_string()),
        };
        client(&server)
            .time_entries()
            .list_for_user("ws1", "u1", &range)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_range_appends_no_query_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/user/u1/time-entries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        client(&server)
            .time_entries()
            .list_for_user("ws1", "u1", &TimeEntryRange::default())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_empty_string_bounds_are_dropped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/user/u1/time-entries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let range = TimeEntryRange {
            start: Some(String::new()),
            end: Some(String::new()),
        };
        client(&server)
            .time_entries()
            .list_for_user("ws1", "u1", &range)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_create_posts_the_wire_shape() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/workspaces/ws1/time-entries"))
            .and(body_json(json!({
                "start": "2024-01-01T00:00:00Z",
                "end": "2024-01-01T01:00:00Z",
                "description": "Added entry",
                "projectId": "p1"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": "te2", "description": "Added entry"})),
            )
            .mount(&server)
            .await;

        let entry = NewTimeEntry {
            start: "2024-01-01T00:00:00Z".to_string(),
            end: "2024-01-01T01:00:00Z".to_string(),
            description: "Added entry".to_string(),
            project_id: "p1".to_string(),
        };
        let created = client(&server)
            .time_entries()
            .create("ws1", &entry)
            .await
            .unwrap();
        assert_eq!(created.0["description"], "Added entry");
    }
}
