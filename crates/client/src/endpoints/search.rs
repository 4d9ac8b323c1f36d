//! Oneshot search endpoint.
//!
//! A oneshot search is a search job created with `exec_mode=oneshot`: Splunk
//! runs it to completion and returns the results in the creation response, so
//! no job polling or cleanup is needed.

use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{MessageType, OneshotResults, SearchRow};

const SEARCH_JOBS_PATH: &str = "/services/search/jobs";

/// Run an SPL query as a oneshot search and return every result row.
pub async fn run_oneshot(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
) -> Result<Vec<SearchRow>> {
    debug!("Running oneshot search: {}", query);

    let url = format!("{}{}", base_url, SEARCH_JOBS_PATH);

    let form_data = [
        ("search", query),
        ("exec_mode", "oneshot"),
        ("output_mode", "json"),
        ("count", "0"),
    ];

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form_data);
    let response = send_request(builder, SEARCH_JOBS_PATH, "POST").await?;

    // Splunk answers a oneshot search with no results with an empty body
    let body = response.text().await?;
    if body.trim().is_empty() {
        debug!("Oneshot search returned an empty body");
        return Ok(Vec::new());
    }

    let parsed: OneshotResults = serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse oneshot search results: {}", e))
    })?;

    // No rows plus a FATAL message means the search itself failed.
    if parsed.results.is_empty()
        && let Some(fatal) = parsed
            .messages
            .iter()
            .find(|msg| msg.message_type == MessageType::Fatal)
    {
        return Err(ClientError::InvalidResponse(format!(
            "Search failed: {}",
            fatal.text
        )));
    }

    for msg in &parsed.messages {
        if matches!(msg.message_type, MessageType::Error | MessageType::Fatal) {
            warn!("Search reported {}: {}", msg.message_type, msg.text);
        }
    }

    debug!("Oneshot search returned {} rows", parsed.results.len());
    Ok(parsed.results)
}

/// Quote a value for use inside SPL, escaping backslashes and double quotes.
pub fn quote_spl(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
