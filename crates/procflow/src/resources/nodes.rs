//! Process nodes API endpoint

use super::Resource;
use crate::{
    client::Client,
    error::SendResult,
    http::RequestDescriptor,
    types::{CreateProcessNodeRequest, ProcessNode, UpdateProcessNodeRequest},
};

const NODES_PATH: &str = "/process/nodes";

/// Process nodes resource.
#[derive(Clone)]
pub struct Nodes {
    client: Client,
}

impl Nodes {
    /// Create a new Nodes resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the nodes of one process definition.
    pub async fn list(&self, process_definition_id: i64) -> SendResult<Vec<ProcessNode>> {
        self.client
            .send_as(
                RequestDescriptor::get(NODES_PATH)
                    .query("processDefinitionId", process_definition_id),
            )
            .await
    }

    /// Add a node and return it as stored.
    pub async fn add(&self, request: &CreateProcessNodeRequest) -> SendResult<ProcessNode> {
        let descriptor = RequestDescriptor::post(NODES_PATH).json(request);
        self.client.send_as(descriptor).await
    }

    /// Replace a node and return it as stored.
    pub async fn update(&self, node: &UpdateProcessNodeRequest) -> SendResult<ProcessNode> {
        let descriptor = RequestDescriptor::put(NODES_PATH).json(node);
        self.client.send_as(descriptor).await
    }

    /// Delete a node.
    pub async fn delete(&self, id: i64) -> SendResult<()> {
        self.client
            .send(RequestDescriptor::delete(format!("{}/{}", NODES_PATH, id)))
            .await
            .map(|_| ())
    }
}

impl Resource for Nodes {
    fn client(&self) -> &Client {
        &self.client
    }
}
