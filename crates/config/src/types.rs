//! Configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the top-level `Config` combining connection and credentials.
//!
//! Does NOT handle:
//! - Loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` is always an absolute http(s) URL without a trailing slash.
//! - The API token is held as a `SecretString` and never printed by `Debug`.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., https://localhost:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Complete, validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub api_token: SecretString,
}

impl Config {
    /// Create a config with default connection settings.
    pub fn with_api_token(base_url: String, api_token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            api_token,
        }
    }
}
