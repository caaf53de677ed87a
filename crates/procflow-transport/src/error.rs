//! Transport error types

use std::fmt;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while performing a single HTTP exchange.
///
/// Variants are split by how far the exchange got: [`TransportError::InvalidRequest`]
/// and [`TransportError::Serialization`] never reach the network, every other
/// variant means the request was handed to the network but no complete
/// response came back.
#[derive(Debug)]
pub enum TransportError {
    /// The request could not be built (bad method, URL, header, body)
    InvalidRequest(String),

    /// Request body could not be serialized
    Serialization(String),

    /// Connection could not be established
    Connection(String),

    /// Deadline elapsed before a response arrived
    Timeout,

    /// Request was dispatched but the exchange broke before completing
    Http(String),
}

impl TransportError {
    /// Whether the request was handed to the network before failing.
    pub fn was_dispatched(&self) -> bool {
        !matches!(self, Self::InvalidRequest(_) | Self::Serialization(_))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(msg) => write!(f, "{}", msg),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Self::Connection(msg) => write!(f, "Connection error: {}", msg),
            Self::Timeout => write!(f, "Timeout"),
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_errors_are_not_dispatched() {
        assert!(!TransportError::InvalidRequest("bad".into()).was_dispatched());
        assert!(!TransportError::Serialization("bad".into()).was_dispatched());
    }

    #[test]
    fn test_network_errors_are_dispatched() {
        assert!(TransportError::Timeout.was_dispatched());
        assert!(TransportError::Connection("refused".into()).was_dispatched());
        assert!(TransportError::Http("reset".into()).was_dispatched());
    }

    #[test]
    fn test_invalid_request_display_is_verbatim() {
        let err = TransportError::InvalidRequest("Unsupported HTTP method: BREW".into());
        assert_eq!(err.to_string(), "Unsupported HTTP method: BREW");
    }
}
