//! Process execution API endpoint

use super::Resource;
use crate::{
    client::Client,
    error::SendResult,
    http::RequestDescriptor,
    types::{ExecuteProcessRequest, ExecuteProcessResponse},
};

/// Process execution resource.
#[derive(Clone)]
pub struct Executions {
    client: Client,
}

impl Executions {
    /// Create a new Executions resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run a process definition with `request.parameters`.
    ///
    /// A returned `Ok` only means the call went through; the execution
    /// itself may still have failed, see
    /// [`ExecuteProcessResponse::into_result`].
    pub async fn execute(
        &self,
        process_definition_id: i64,
        request: &ExecuteProcessRequest,
    ) -> SendResult<ExecuteProcessResponse> {
        let descriptor =
            RequestDescriptor::post(format!("/process/execute/{}", process_definition_id))
                .json(request);
        self.client.send_as(descriptor).await
    }
}

impl Resource for Executions {
    fn client(&self) -> &Client {
        &self.client
    }
}
