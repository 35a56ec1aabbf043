// Argument extraction shared by the tools.
//
// Optional arguments are read permissively: a value of the wrong type is
// treated as absent, never rejected.

use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use clockify_client::TimeEntryRange;
use serde_json::Value;

/// Read an optional string argument.
///
/// Returns the value only when it is a present, non-empty string.
pub fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Read an optional array-of-strings argument.
///
/// Returns the value only when it is an array whose elements are all
/// strings.
pub fn optional_str_array(args: &Value, key: &str) -> Option<Vec<String>> {
    let items = args.get(key)?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Read the optional `start`/`end` bounds shared by the time-entry tools.
pub fn optional_range(args: &Value) -> TimeEntryRange {
    TimeEntryRange {
        start: optional_str(args, "start").map(str::to_string),
        end: optional_str(args, "end").map(str::to_string),
    }
}

/// Read a required string argument.
///
/// The dispatcher validates required fields up front, so this only fails on
/// an invocation that bypassed validation.
pub fn required_str<'a>(args: &'a Value, tool: &str, key: &str) -> Result<&'a str, DispatchError> {
    optional_str(args, key).ok_or_else(|| DispatchError::MissingArguments {
        tool: tool.to_string(),
        fields: vec![key.to_string()],
    })
}

/// Validate an invocation against the schema's `required` list.
///
/// A required field is satisfied only by a present, non-empty string; every
/// unsatisfied name is reported in one error.
pub fn validate_required(schema: &ToolSchema, args: &Value) -> Result<(), DispatchError> {
    let missing: Vec<String> = schema
        .input_schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| {
            fields
                .iter()
                .filter_map(Value::as_str)
                .filter(|field| optional_str(args, field).is_none())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::MissingArguments {
            tool: schema.name.clone(),
            fields: missing,
        })
    }
}
