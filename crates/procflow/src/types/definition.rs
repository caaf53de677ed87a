//! Process definition records

use serde::{Deserialize, Serialize};

/// Lifecycle state of a process definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefinitionStatus {
    /// Being edited, not executable
    Draft,
    /// Live and executable
    Published,
    /// Kept for history, no longer offered
    Deprecated,
}

/// A stored process definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    /// Server-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version label
    pub version: String,

    /// Lifecycle state
    pub status: DefinitionStatus,

    /// Creation timestamp, as rendered by the server
    pub create_time: String,

    /// Last update timestamp, as rendered by the server
    pub update_time: String,
}

/// Body of a definition update; the full record.
pub type UpdateProcessDefinitionRequest = ProcessDefinition;

/// Body of a definition create: a definition without server-owned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessDefinitionRequest {
    /// Display name
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version label
    pub version: String,

    /// Initial lifecycle state
    pub status: DefinitionStatus,
}

impl CreateProcessDefinitionRequest {
    /// A new draft named `name` at `version`.
    pub fn draft(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: version.into(),
            status: DefinitionStatus::Draft,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_wire_format() {
        let definition: ProcessDefinition = serde_json::from_value(json!({
            "id": 3,
            "name": "onboarding",
            "version": "1.0.0",
            "status": "PUBLISHED",
            "createTime": "2024-05-01T10:00:00",
            "updateTime": "2024-05-02T10:00:00"
        }))
        .unwrap();

        assert_eq!(definition.id, 3);
        assert_eq!(definition.status, DefinitionStatus::Published);
        assert_eq!(definition.description, None);
        assert_eq!(definition.create_time, "2024-05-01T10:00:00");
    }

    #[test]
    fn test_create_request_omits_server_fields() {
        let request = CreateProcessDefinitionRequest::draft("onboarding", "0.1.0")
            .with_description("new hires");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "onboarding",
                "description": "new hires",
                "version": "0.1.0",
                "status": "DRAFT"
            })
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<DefinitionStatus>(json!("ARCHIVED"));
        assert!(result.is_err());
    }
}
