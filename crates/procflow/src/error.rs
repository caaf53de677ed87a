//! Error types for the procflow client
//!
//! Two families live here:
//!
//! - [`TransportFailure`]: the outcome of a failed [`send`](crate::Client::send).
//!   Exactly three shapes, each carrying everything needed to build the
//!   user-facing message.
//! - [`Error`]: problems building the client itself (bad base path, bad
//!   environment values). These never come out of a call.

use std::fmt;

use procflow_transport::TransportError;
use thiserror::Error;

/// Result type alias for client construction and configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for a single call through the client.
pub type SendResult<T> = std::result::Result<T, TransportFailure>;

/// Message shown when a request was sent but nothing came back.
pub const NO_RESPONSE_MESSAGE: &str = "network unavailable, please check connection";

/// Construction and configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid base path provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Classified failure of a single call.
///
/// Every failed call maps onto exactly one variant, decided once at the
/// point of failure. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// A response arrived with a non-success status code.
    ServerError {
        /// HTTP status code
        status: u16,
        /// Request path as the caller supplied it
        path: String,
    },

    /// The request went out but no response came back (timeout, network down).
    NoResponse,

    /// The request could not be built or dispatched at all.
    LocalError {
        /// Message of the underlying error, verbatim
        message: String,
    },
}

impl TransportFailure {
    /// Build a `ServerError` for `status` on `path`.
    pub fn server(status: u16, path: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            path: path.into(),
        }
    }

    /// Build a `LocalError` carrying `message` unchanged.
    pub fn local(message: impl Into<String>) -> Self {
        Self::LocalError {
            message: message.into(),
        }
    }

    /// Classify a raw transport error.
    ///
    /// Anything that never reached the network is local; everything else is
    /// a missing response. Responses with error statuses are not transport
    /// errors and are classified by [`TransportFailure::server`] instead.
    pub fn from_transport(err: &TransportError) -> Self {
        if err.was_dispatched() {
            Self::NoResponse
        } else {
            Self::local(err.to_string())
        }
    }

    /// User-facing message for this failure.
    pub fn message(&self) -> String {
        match self {
            Self::ServerError { status, path } => server_message(*status, path),
            Self::NoResponse => NO_RESPONSE_MESSAGE.to_string(),
            Self::LocalError { message } => message.clone(),
        }
    }

    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the call as unauthenticated (401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Short variant name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServerError { .. } => "server_error",
            Self::NoResponse => "no_response",
            Self::LocalError { .. } => "local_error",
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for TransportFailure {}

impl From<TransportError> for TransportFailure {
    fn from(err: TransportError) -> Self {
        Self::from_transport(&err)
    }
}

fn server_message(status: u16, path: &str) -> String {
    match status {
        400 => "invalid request parameters".to_string(),
        401 => "unauthorized, please sign in".to_string(),
        403 => "access denied".to_string(),
        404 => format!("resource not found: {}", path),
        500 => "internal server error".to_string(),
        503 => "service unavailable".to_string(),
        other => format!("request error: {}", other),
    }
}
