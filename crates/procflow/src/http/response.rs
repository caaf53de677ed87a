//! Response envelopes

use procflow_transport::HttpResponse;
use std::collections::HashMap;

/// A successful exchange as received from the transport.
///
/// The client only ever hands [`payload`](Self::payload) to callers; the
/// envelope exists so the unwrap step has something explicit to discard.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    status: u16,
    payload: serde_json::Value,
    headers: HashMap<String, String>,
}

impl ResponseEnvelope {
    /// Create a new envelope.
    pub fn new(status: u16, payload: serde_json::Value, headers: HashMap<String, String>) -> Self {
        Self {
            status,
            payload,
            headers,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Get the headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Discard the envelope, keeping the payload.
    pub fn into_payload(self) -> serde_json::Value {
        self.payload
    }
}

impl From<HttpResponse> for ResponseEnvelope {
    /// Empty bodies become `null`, JSON bodies are parsed, anything else is
    /// kept as a JSON string of the body text.
    fn from(response: HttpResponse) -> Self {
        let payload = if response.body.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&response.body).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&response.body).into_owned())
            })
        };

        Self::new(response.status, payload, response.headers)
    }
}
