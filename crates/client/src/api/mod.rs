//! Typed facades over the Clockify API endpoints.

pub mod projects;
pub mod reports;
pub mod time_entries;
pub mod users;

pub use projects::ProjectsApi;
pub use reports::{ReportsApi, SummaryFilter, SummaryReportRequest};
pub use time_entries::{NewTimeEntry, TimeEntriesApi, TimeEntryRange};
pub use users::UsersApi;
