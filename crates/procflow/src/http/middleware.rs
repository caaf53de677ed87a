//! Request-stage interceptors
//!
//! Every descriptor passes through the client's [`InterceptorChain`] right
//! before it is resolved and dispatched. An empty chain is the identity.

use super::RequestDescriptor;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by an interceptor.
///
/// The client turns it into a `LocalError` carrying `message` and skips
/// dispatch entirely.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct InterceptError {
    /// Human-readable reason
    pub message: String,
}

impl InterceptError {
    /// Create a new interceptor error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Hook run on every outgoing descriptor.
///
/// Interceptors run synchronously; they must not alter the method, path or
/// body unless that is their explicit purpose.
pub trait RequestInterceptor: Send + Sync {
    /// Process a descriptor before it is sent.
    fn intercept(&self, request: RequestDescriptor) -> Result<RequestDescriptor, InterceptError> {
        Ok(request)
    }
}

/// Interceptor that adds logging/tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingInterceptor;

impl RequestInterceptor for TracingInterceptor {
    fn intercept(&self, request: RequestDescriptor) -> Result<RequestDescriptor, InterceptError> {
        tracing::debug!("Preparing {} request to {}", request.method(), request.path());
        Ok(request)
    }
}

/// Ordered list of interceptors, applied first to last.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interceptor to the end of the chain.
    pub fn push(&mut self, interceptor: Arc<dyn RequestInterceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Number of interceptors in the chain.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is the identity.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .finish()
    }
}

impl RequestInterceptor for InterceptorChain {
    fn intercept(
        &self,
        mut request: RequestDescriptor,
    ) -> Result<RequestDescriptor, InterceptError> {
        for interceptor in &self.interceptors {
            request = interceptor.intercept(request)?;
        }
        Ok(request)
    }
}
