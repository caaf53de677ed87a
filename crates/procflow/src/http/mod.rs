//! HTTP request/response stages
//!
//! Descriptors describe a call relative to the base path, interceptors
//! rewrite them before dispatch, and envelopes wrap what came back.

pub use middleware::{InterceptError, InterceptorChain, RequestInterceptor, TracingInterceptor};
pub use request::RequestDescriptor;
pub use response::ResponseEnvelope;

pub mod middleware;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
