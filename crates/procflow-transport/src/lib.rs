//! HTTP transport layer for procflow
//!
//! Provides a trait-based transport abstraction so the procflow client can
//! talk to the process-definition backend over reqwest in production and to
//! an in-memory transport in tests.
//!
//! # Architecture
//!
//! - **Transport trait**: one exchange per call, no retries
//! - **HTTP transport**: reqwest client with a single fixed timeout
//! - **Error handling**: raw errors tagged by how far the exchange got

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```ignore
//! use procflow_transport::{HttpRequest, HttpTransport, Transport};
//!
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new("GET", "http://localhost:8080/api/process/definitions");
//! let response = transport.send_http(request).await?;
//! ```

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
