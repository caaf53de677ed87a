//! Process definitions API endpoint

use super::Resource;
use crate::{
    client::Client,
    error::SendResult,
    http::RequestDescriptor,
    types::{CreateProcessDefinitionRequest, ProcessDefinition, UpdateProcessDefinitionRequest},
};

const DEFINITIONS_PATH: &str = "/process/definitions";

/// Process definitions resource.
#[derive(Clone)]
pub struct Definitions {
    client: Client,
}

impl Definitions {
    /// Create a new Definitions resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all process definitions.
    pub async fn list(&self) -> SendResult<Vec<ProcessDefinition>> {
        self.client
            .send_as(RequestDescriptor::get(DEFINITIONS_PATH))
            .await
    }

    /// Get one process definition.
    pub async fn get(&self, id: i64) -> SendResult<ProcessDefinition> {
        self.client
            .send_as(RequestDescriptor::get(format!("{}/{}", DEFINITIONS_PATH, id)))
            .await
    }

    /// Create a process definition and return it as stored.
    pub async fn create(
        &self,
        request: &CreateProcessDefinitionRequest,
    ) -> SendResult<ProcessDefinition> {
        let descriptor = RequestDescriptor::post(DEFINITIONS_PATH).json(request);
        self.client.send_as(descriptor).await
    }

    /// Replace a process definition and return it as stored.
    pub async fn update(
        &self,
        definition: &UpdateProcessDefinitionRequest,
    ) -> SendResult<ProcessDefinition> {
        let descriptor = RequestDescriptor::put(DEFINITIONS_PATH).json(definition);
        self.client.send_as(descriptor).await
    }

    /// Delete a process definition.
    pub async fn delete(&self, id: i64) -> SendResult<()> {
        self.client
            .send(RequestDescriptor::delete(format!("{}/{}", DEFINITIONS_PATH, id)))
            .await
            .map(|_| ())
    }
}

impl Resource for Definitions {
    fn client(&self) -> &Client {
        &self.client
    }
}
