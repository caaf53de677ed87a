//! Process execution records

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Body of an execute call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteProcessRequest {
    /// Input parameters handed to the first node
    pub parameters: JsonMap,
}

impl ExecuteProcessRequest {
    /// Request with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Outcome of an execute call.
///
/// A transport-level success can still carry a failed execution; check
/// [`success`](Self::success) or use [`into_result`](Self::into_result).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteProcessResponse {
    /// Whether the process ran to completion
    pub success: bool,

    /// Output of the last node, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Failure details, on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ExecutionError>,
}

impl ExecuteProcessResponse {
    /// Split into the result value or the execution error.
    ///
    /// An unsuccessful response without error details yields a generic
    /// `UNKNOWN` error.
    pub fn into_result(self) -> Result<serde_json::Value, ExecutionError> {
        if self.success {
            Ok(self.result.unwrap_or(serde_json::Value::Null))
        } else {
            Err(self.error.unwrap_or_else(|| ExecutionError {
                code: "UNKNOWN".to_string(),
                message: "execution failed without details".to_string(),
                details: None,
            }))
        }
    }
}

/// Why an execution failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ExecutionError {
    /// Machine-readable code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Extra context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonMap>,
}
