//! Jira issue description fetch
//!
//! Talks to the Jira Cloud REST API (v3) with basic auth. A non-200
//! response is not a failure of the fetch: its status and body are
//! folded into the returned text so the user sees what Jira said.
//! Only transport-level problems surface as errors.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value as JsonValue;

use crate::adf::{extract_text, AdfNode};
use crate::transport::{SyncTransport, Transport, TransportError};

/// Shown when the issue exists but carries no description.
pub const NO_DESCRIPTION: &str = "No description found.";

/// Fetch an issue's description as plain text.
///
/// Returns the flattened description, `NO_DESCRIPTION` when the issue
/// has none, or an `Error: {status}, {body}` line for non-200 replies.
pub fn fetch_description(
    transport: &Transport,
    domain: &str,
    issue_key: &str,
    username: &str,
    api_token: &str,
) -> Result<String, TransportError> {
    let url = format!("https://{}/rest/api/3/issue/{}", domain, issue_key);
    let auth = basic_auth_header(username, api_token);
    let headers = [
        ("Accept", "application/json"),
        ("Authorization", auth.as_str()),
    ];

    let response = transport.get(&url, &headers)?;

    if response.status == 200 {
        Ok(description_from_body(&response.body))
    } else {
        Ok(format!("Error: {}, {}", response.status, response.body))
    }
}

/// Basic auth value for the Atlassian username + API token pair
fn basic_auth_header(username: &str, api_token: &str) -> String {
    let credentials = format!("{}:{}", username, api_token);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Pull `fields.description.content` out of the issue JSON and flatten it.
///
/// Missing, null, or empty content means the issue has no description.
/// An unparseable body is treated the same way.
fn description_from_body(body: &str) -> String {
    let issue: JsonValue = serde_json::from_str(body).unwrap_or(JsonValue::Null);
    let content = issue
        .get("fields")
        .and_then(|fields| fields.get("description"))
        .and_then(|description| description.get("content"))
        .cloned()
        .unwrap_or(JsonValue::Null);

    let is_empty = match &content {
        JsonValue::Null => true,
        JsonValue::Array(items) => items.is_empty(),
        _ => false,
    };

    if is_empty {
        NO_DESCRIPTION.to_string()
    } else {
        extract_text(&AdfNode::from_value(&content))
    }
}
