//! Main Splunk REST API client and API methods.
//!
//! This module provides the primary [`SplunkClient`] for the catalog
//! endpoints used by field extraction.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indexes`: Index listing
//! - `sourcetypes`: Sourcetype discovery and field extraction
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retrying failed requests (every call is attempted once)
//!
//! # Invariants
//! - Every request carries `Authorization: Bearer <token>`
//! - The token is only exposed at the moment a request is built

pub mod builder;

mod indexes;
mod sourcetypes;

use secrecy::{ExposeSecret, SecretString};

/// Splunk REST API client authenticated with a bearer API token.
///
/// # Creating a Client
///
/// Use [`SplunkClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
/// use secrecy::SecretString;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .api_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }
}
