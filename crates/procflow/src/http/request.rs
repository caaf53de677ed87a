//! Request descriptors

use crate::error::TransportFailure;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use procflow_transport::HttpRequest;
use serde::Serialize;
use url::Url;

/// Description of one call, relative to the client's base path.
///
/// Built fresh per call and consumed by [`Client::send`](crate::Client::send).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    /// Serialization error from [`json`](Self::json), reported at send time
    body_error: Option<String>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl RequestDescriptor {
    /// Create a new descriptor.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            body_error: None,
            query: Vec::new(),
            headers: HeaderMap::new(),
        }
    }

    /// `GET path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT path`
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `DELETE path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set the JSON body.
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self.body_error = None;
        self
    }

    /// Serialize `value` into the JSON body.
    ///
    /// If `value` cannot be represented as JSON the descriptor still builds,
    /// and sending it fails with a `LocalError` carrying the serializer's
    /// message.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => {
                self.body = Some(body);
                self.body_error = None;
            }
            Err(e) => {
                self.body = None;
                self.body_error = Some(e.to_string());
            }
        }
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Set a header.
    ///
    /// # Panics
    /// Panics if the header name or value contains invalid characters.
    /// For fallible header setting, use [`try_header`](Self::try_header) instead.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .unwrap_or_else(|e| panic!("Invalid header name '{}': {}", key_str, e));
        let value = value_str
            .parse::<HeaderValue>()
            .unwrap_or_else(|e| panic!("Invalid header value '{}': {}", value_str, e));

        self.headers.insert(key, value);
        self
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    ///
    /// This is the fallible version of [`header`](Self::header).
    ///
    /// # Errors
    /// Returns a `LocalError` if the header name or value contains invalid characters.
    pub fn try_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, TransportFailure> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str.parse::<HeaderName>().map_err(|e| {
            TransportFailure::local(format!("Invalid header name '{}': {}", key_str, e))
        })?;
        let value = value_str.parse::<HeaderValue>().map_err(|e| {
            TransportFailure::local(format!("Invalid header value '{}': {}", value_str, e))
        })?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the path, as supplied by the caller.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the body.
    pub fn body_ref(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Get the query parameters.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the headers, for interceptors.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Resolve this descriptor's path and query against `base`.
    ///
    /// Relative paths are appended to the base path, so `/process/nodes`
    /// under `http://host/api` becomes `http://host/api/process/nodes`.
    /// Absolute `http`/`https` URLs are used unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `LocalError` if the result is not a valid URL.
    pub fn resolve(&self, base: &Url) -> Result<Url, TransportFailure> {
        let mut url = if is_absolute(&self.path) {
            Url::parse(&self.path)
        } else {
            let base = base.as_str().trim_end_matches('/');
            let path = self.path.trim_start_matches('/');
            Url::parse(&format!("{}/{}", base, path))
        }
        .map_err(|e| {
            tracing::debug!(path = %self.path, error = %e, "request path does not resolve");
            TransportFailure::local(e.to_string())
        })?;

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }

    /// Turn this descriptor into a wire request against `base`.
    ///
    /// # Errors
    ///
    /// Returns a `LocalError` if the path cannot be resolved or the body
    /// cannot be serialized.
    pub(crate) fn into_http_request(self, base: &Url) -> Result<HttpRequest, TransportFailure> {
        if let Some(message) = self.body_error {
            return Err(TransportFailure::local(message));
        }

        let url = self.resolve(base)?;
        let mut request = HttpRequest::new(self.method.as_str(), url.as_str());

        if let Some(body) = &self.body {
            request = request
                .with_json_body(body)
                .map_err(|e| TransportFailure::local(e.to_string()))?;
        }

        // Caller headers win over the defaults set above. Repeated values
        // for one name are folded into a single comma-separated line.
        for key in self.headers.keys() {
            let values = self
                .headers
                .get_all(key)
                .iter()
                .map(|value| value.to_str())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    TransportFailure::local(format!("Invalid header value for '{}': {}", key, e))
                })?;
            request = request.with_header(key.as_str(), values.join(", "));
        }

        Ok(request)
    }
}

fn is_absolute(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
