//! HTTP transport implementation
//!
//! Provides the reqwest-backed implementation of the Transport trait.

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
