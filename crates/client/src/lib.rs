//! # clockify-client
//!
//! Rust client for the Clockify time-tracking REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clockify_client::ClockifyClient;
//!
//! #[tokio::main]
//! async fn main() -> clockify_client::Result<()> {
//!     // Reads CLOCKIFY_API_KEY from the environment.
//!     let client = ClockifyClient::from_env()?;
//!
//!     let me = client.users().current().await?;
//!     let projects = client.projects().list(&me.active_workspace).await?;
//!     println!("Found {} projects", projects.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export the main client
pub use client::{ClockifyClient, ClockifyClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};

// Re-export the API facades and request shapes
pub use api::{
    NewTimeEntry, ProjectsApi, ReportsApi, SummaryFilter, SummaryReportRequest, TimeEntriesApi,
    TimeEntryRange, UsersApi,
};

// Re-export the upstream resource shapes
pub use types::{CurrentUser, Project, SummaryReport, TimeEntry, User};
