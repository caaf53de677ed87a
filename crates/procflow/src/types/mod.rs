//! API contract types
//!
//! Request and response records exchanged with the process-definition
//! backend. Field names are camelCase on the wire.

// Re-export commonly used types from submodules
pub use definition::*;
pub use execution::*;
pub use node::*;

// Submodules
pub mod definition;
pub mod execution;
pub mod node;

/// Free-form JSON object, as used for node configs and execution parameters.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
