//! Process node records

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// One step of a process definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNode {
    /// Server-assigned identifier
    pub id: i64,

    /// Owning process definition
    pub process_definition_id: i64,

    /// Display name
    pub name: String,

    /// Node kind, interpreted by the executor
    #[serde(rename = "type")]
    pub node_type: String,

    /// Kind-specific settings
    #[serde(default)]
    pub config: JsonMap,

    /// Position within the definition
    pub sort: i32,
}

/// Body of a node update; the full record.
pub type UpdateProcessNodeRequest = ProcessNode;

/// Body of a node create: a node without its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessNodeRequest {
    /// Owning process definition
    pub process_definition_id: i64,

    /// Display name
    pub name: String,

    /// Node kind
    #[serde(rename = "type")]
    pub node_type: String,

    /// Kind-specific settings
    #[serde(default)]
    pub config: JsonMap,

    /// Position within the definition
    pub sort: i32,
}

impl CreateProcessNodeRequest {
    /// A node of `node_type` named `name` at position `sort`, with an empty config.
    pub fn new(
        process_definition_id: i64,
        name: impl Into<String>,
        node_type: impl Into<String>,
        sort: i32,
    ) -> Self {
        Self {
            process_definition_id,
            name: name.into(),
            node_type: node_type.into(),
            config: JsonMap::new(),
            sort,
        }
    }

    /// Set one config entry.
    pub fn with_config(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }
}
