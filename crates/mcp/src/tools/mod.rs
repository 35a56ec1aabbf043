pub mod args;
pub mod projects;
pub mod reports;
pub mod time_entries;
pub mod users;
mod registry;

pub use args::{optional_range, optional_str, optional_str_array, required_str, validate_required};
pub use projects::ListProjectsTool;
pub use registry::{
    json_schema_array, json_schema_object, json_schema_string, Tool, ToolRegistry,
};
pub use reports::GetSummaryReportTool;
pub use time_entries::{AddTimeEntryTool, GetTimeEntriesTool};
pub use users::{GetUserTimeEntriesByNameTool, GetUserTimeEntriesTool, ListUsersTool};
