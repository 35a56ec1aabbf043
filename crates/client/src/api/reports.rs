//! Reports API endpoints.

use crate::client::ClockifyClient;
use crate::error::Result;
use crate::types::SummaryReport;
use serde::Serialize;

/// Request body for the summary report endpoint.
///
/// Grouping and sort order are fixed: totals are grouped by user then
/// project, ascending.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReportRequest {
    pub date_range_start: String,
    pub date_range_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    pub summary_filter: SummaryFilter,
    pub sort_order: String,
    pub groups: Vec<String>,
}

impl SummaryReportRequest {
    /// Build a request for the given date range with no user or project
    /// filters.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            date_range_start: start.into(),
            date_range_end: end.into(),
            users: None,
            projects: None,
            summary_filter: SummaryFilter::default(),
            sort_order: "ASCENDING".to_string(),
            groups: vec!["USER".to_string(), "PROJECT".to_string()],
        }
    }
}

/// Empty filter object the report endpoint expects to be present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryFilter {}

/// Reports API for aggregated summaries.
pub struct ReportsApi<'a> {
    client: &'a ClockifyClient,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(client: &'a ClockifyClient) -> Self {
        Self { client }
    }

    /// Request a summary report over a date range.
    pub async fn summary(
        &self,
        workspace_id: &str,
        request: &SummaryReportRequest,
    ) -> Result<SummaryReport> {
        self.client
            .http
            .post(
                &format!("/workspaces/{workspace_id}/reports/summary"),
                request,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClockifyClient;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ClockifyClient {
        ClockifyClient::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_summary_sends_fixed_grouping_and_sort() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/workspaces/ws1/reports/summary"))
            .and(body_partial_json(json!({
                "dateRangeStart": "2024-01-01",
                "dateRangeEnd": "2024-01-31",
                "summaryFilter": {},
                "sortOrder": "ASCENDING",
                "groups": ["USER", "PROJECT"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totals": []})))
            .mount(&server)
            .await;

        let request = SummaryReportRequest::new("2024-01-01", "2024-01-31");
        let report = client(&server)
            .reports()
            .summary("ws1", &request)
            .await
            .unwrap();
        assert_eq!(report.0["totals"], json!([]));
    }

    #[tokio::test]
    async fn test_summary_omits_absent_filters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/workspaces/ws1/reports/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let request = SummaryReportRequest::new("2024-01-01", "2024-01-31");
        client(&server)
            .reports()
            .summary("ws1", &request)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert!(body.get("users").is_none());
        assert!(body.get("projects").is_none());
    }

    #[tokio::test]
    async fn test_summary_forwards_filters_when_set() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/workspaces/ws1/reports/summary"))
            .and(body_partial_json(json!({
                "users": ["u1", "u2"],
                "projects": ["p1"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let mut request = SummaryReportRequest::new("2024-01-01", "2024-01-31");
        request.users = Some(vec!["u1".to_string(), "u2".to_string()]);
        request.projects = Some(vec!["p1".to_string()]);
        client(&server)
            .reports()
            .summary("ws1", &request)
            .await
            .unwrap();
    }
}
