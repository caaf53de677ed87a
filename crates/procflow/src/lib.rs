//! # procflow
//!
//! Async client for the process-definition management API:
//! - One shared client bound to a fixed base path and timeout
//! - Request-stage interceptors as an extension point
//! - Payload unwrapping on success
//! - A three-way failure taxonomy with user-facing messages
//! - Typed endpoints for definitions, nodes and executions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use procflow::{Client, TransportFailure};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_path("http://localhost:8080/api")
//!         .build()?;
//!
//!     match client.definitions().list().await {
//!         Ok(definitions) => println!("{} definitions", definitions.len()),
//!         Err(failure) if failure.is_unauthorized() => println!("sign in first"),
//!         Err(failure) => return Err(failure.into()),
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result, SendResult, TransportFailure};
pub use http::{
    InterceptError, InterceptorChain, RequestDescriptor, RequestInterceptor, ResponseEnvelope,
    TracingInterceptor,
};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use procflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Notifier, RequestDescriptor, SendResult, TransportFailure,
        types::{
            DefinitionStatus, ExecuteProcessRequest, ExecuteProcessResponse, ProcessDefinition,
            ProcessNode,
        },
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base path
pub const DEFAULT_BASE_PATH: &str = "http://localhost:8080/api";

/// Default per-call timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
