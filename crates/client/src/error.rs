//! Error types for the Splunk client.

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The token was rejected (HTTP 401) or lacks permission (HTTP 403).
    #[error("Authentication failed ({status}) at {url}: {message}")]
    Authentication {
        status: u16,
        url: String,
        message: String,
    },

    /// The endpoint or searched object does not exist (HTTP 404).
    #[error("Resource not found at {url}: {message}")]
    NotFound { url: String, message: String },

    /// Timeout, refused connection, or reset while talking to Splunk.
    #[error("Transient network error: {0}")]
    TransientNetwork(String),

    /// Any other non-success response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Api {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure that is neither a timeout nor a connection problem.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || is_connection_reset(&err) {
            Self::TransientNetwork(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Walk the source chain looking for an I/O reset/abort/broken pipe.
fn is_connection_reset(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = StdError::source(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            return matches!(
                io.kind(),
                std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::UnexpectedEof
            );
        }
        source = cause.source();
    }
    false
}

impl ClientError {
    /// Classify a non-success HTTP response.
    pub fn from_status(
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    ) -> Self {
        match status {
            401 | 403 => Self::Authentication {
                status,
                url,
                message,
            },
            404 => Self::NotFound { url, message },
            _ => Self::Api {
                status,
                url,
                message,
                request_id,
            },
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if this error is a timeout or connection problem.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TransientNetwork(_))
    }

    /// HTTP status associated with this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
