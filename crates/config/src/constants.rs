//! Centralized constants for the splunk-fields workspace.
//!
//! Default values and environment variable names shared across crates.

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Splunk management API (e.g. `https://splunk:8089`).
pub const ENV_SPLUNK_URL: &str = "SPLUNK_URL";

/// Bearer token used for every request.
pub const ENV_SPLUNK_API_TOKEN: &str = "SPLUNK_API_TOKEN";

/// Per-request timeout in seconds.
pub const ENV_SPLUNK_TIMEOUT: &str = "SPLUNK_TIMEOUT";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SPLUNK_SKIP_VERIFY: &str = "SPLUNK_SKIP_VERIFY";

/// When `1` or `true`, `.env` files are not loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Filesystem Defaults
// =============================================================================

/// Root directory for per-run output directories.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Directory receiving per-run log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name of the result set inside a run directory.
pub const RESULT_FILE_NAME: &str = "splunk_fields.json";
