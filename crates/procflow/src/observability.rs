//! Centralized observability utilities for structured logging
//!
//! Every call through the client is logged through this layer: one debug
//! event when it is sent and one info/warn event when it settles.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::TransportFailure;

/// Structured log record for a single call through the client.
///
/// Created when the call starts and consulted once per stage, so every call
/// produces one `debug` event when dispatched and one `info` or `warn` event
/// when it settles, all carrying the same method and path.
#[derive(Debug, Clone)]
pub struct CallLog {
    method: String,
    path: String,
    started: Instant,
}

impl CallLog {
    /// Start the clock for a call.
    pub fn start(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            started: Instant::now(),
        }
    }

    /// Replace the logged path, e.g. after an interceptor rewrote it.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// HTTP method of the call
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Path of the call, relative to the base path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Time since the call started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The request is about to go out.
    pub fn dispatched(&self, body_size: Option<usize>) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size,
            "Sending HTTP request"
        );
    }

    /// A 2xx response arrived.
    pub fn succeeded(&self, status: u16) {
        info!(
            method = %self.method,
            path = %self.path,
            status,
            elapsed_ms = self.elapsed().as_millis(),
            "HTTP request succeeded"
        );
    }

    /// The call ended in `failure`.
    pub fn failed(&self, failure: &TransportFailure) {
        warn!(
            method = %self.method,
            path = %self.path,
            status = failure.status(),
            elapsed_ms = self.elapsed().as_millis(),
            kind = failure.kind(),
            error = %failure,
            "HTTP request failed"
        );
    }
}

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Defaults to `procflow=info` when `RUST_LOG` is unset. Calling it more
/// than once is harmless; later calls leave the first subscriber in place.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("procflow=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log_creation() {
        let log = CallLog::start("POST", "/process/definitions");
        assert_eq!(log.method(), "POST");
        assert_eq!(log.path(), "/process/definitions");
    }

    #[test]
    fn test_call_log_path_rewrite() {
        let mut log = CallLog::start("GET", "/nodes/1");
        log.set_path("/v2/nodes/1");
        assert_eq!(log.path(), "/v2/nodes/1");
    }

    #[test]
    fn test_log_events_do_not_panic_without_subscriber() {
        let log = CallLog::start("GET", "/process/nodes");
        log.dispatched(None);
        log.dispatched(Some(128));
        log.succeeded(200);
        log.failed(&TransportFailure::NoResponse);
        log.failed(&TransportFailure::server(404, "/process/nodes"));
    }

    #[test]
    fn test_call_log_elapsed() {
        let log = CallLog::start("GET", "/process/nodes");
        std::thread::sleep(Duration::from_millis(10));
        assert!(log.elapsed() >= Duration::from_millis(10));
    }
}
