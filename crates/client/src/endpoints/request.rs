//! Request execution and response classification.
//!
//! This module sends a prepared `reqwest::RequestBuilder` once and turns
//! non-success responses into typed errors:
//! - 401/403 → `ClientError::Authentication`
//! - 404 → `ClientError::NotFound`
//! - anything else → `ClientError::Api`
//!
//! Timeouts and connection failures surface as `ClientError::TransientNetwork`
//! through the `From<reqwest::Error>` conversion.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Sends an HTTP request and classifies the response status.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `endpoint` - Endpoint path, used for logging only
/// * `method` - HTTP method name, used for logging only
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    debug!(method, endpoint, "Sending request");

    let response = builder.send().await.map_err(|e| {
        debug!(method, endpoint, error = %e, "Request failed before a response was received");
        ClientError::from(e)
    })?;

    if response.status().is_success() {
        debug!(method, endpoint, status = response.status().as_u16(), "Request succeeded");
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer Splunk's structured messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.summary(),
        _ => body,
    };

    debug!(method, endpoint, status, "Request returned an error status");

    Err(ClientError::from_status(status, url, message, request_id))
}

/// Read a response body as text and deserialize it.
///
/// `what` names the payload in the error message. Body read failures keep
/// their transport classification; malformed JSON becomes
/// `ClientError::InvalidResponse`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
