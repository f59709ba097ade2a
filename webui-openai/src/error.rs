//! Error types for the proxy client.
//!
//! Most operations surface transport and JSON failures unchanged. Only a few
//! operations look at the HTTP status at all; those report it through
//! [`Error::Request`] or [`Error::Status`].

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all client operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport failure (DNS, connection reset, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered, but the operation treats the status as a failure.
    #[error("{message}")]
    Request {
        /// HTTP status code returned by the server.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// Non-success HTTP status on an endpoint whose body is not JSON.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
    },

    /// The request was aborted through its cancellation handle.
    #[error("Request aborted")]
    Aborted,

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a request error for the given status.
    #[must_use]
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if the request was cancelled by the caller.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
