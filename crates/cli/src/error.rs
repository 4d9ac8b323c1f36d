//! Exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map the root cause of a failed run to one of those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A run that finishes with per-sourcetype failures still exits with `Success`.

use splunk_client::ClientError;
use splunk_config::ConfigError;

use crate::output::OutputError;

/// Structured exit codes for splunk-fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The result file was written.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The API token was rejected (401) or lacks permission (403).
    ///
    /// Scripts should refresh the token rather than retry.
    AuthenticationFailed = 2,

    /// Timeout, refused connection, or reset.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The index or sourcetype listing endpoint answered 404.
    NotFound = 4,

    /// Missing or invalid configuration; nothing was sent to Splunk.
    ConfigError = 5,

    /// The output or log directory, or a file in it, could not be written.
    OutputError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Authentication { .. } => ExitCode::AuthenticationFailed,
            ClientError::TransientNetwork(_) => ExitCode::ConnectionError,
            ClientError::NotFound { .. } => ExitCode::NotFound,
            ClientError::Http(e) if e.is_connect() || e.is_timeout() => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConfigError,
            ClientError::Api { .. } | ClientError::InvalidResponse(_) | ClientError::Http(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<OutputError>().is_some() {
                return ExitCode::OutputError;
            }
        }

        ExitCode::GeneralError
    }
}
