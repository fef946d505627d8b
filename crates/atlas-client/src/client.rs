use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::operation::{GraphqlOperation, GraphqlRequest, GraphqlResponse};
use crate::transport::Transport;

/// Typed GraphQL client over an injected [`Transport`].
#[derive(Debug, Clone)]
pub struct GraphqlClient<T> {
    transport: T,
}

impl<T: Transport> GraphqlClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute a typed operation and return the full response.
    pub async fn execute<O: GraphqlOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<GraphqlResponse<O::ResponseData>> {
        let request = GraphqlRequest::for_operation::<O>(variables);
        let body = serde_json::to_vec(&request)?;

        debug!(operation = O::OPERATION_NAME, "executing operation");
        let bytes = self.transport.send(body).await?;
        let response: GraphqlResponse<O::ResponseData> = serde_json::from_slice(&bytes)?;

        if !response.is_ok() {
            warn!(
                operation = O::OPERATION_NAME,
                errors = response.errors.len(),
                "server returned GraphQL errors"
            );
        }
        Ok(response)
    }

    /// Execute a typed operation, treating any GraphQL error as a failure.
    ///
    /// `Ok(None)` means the server answered with neither errors nor data.
    pub async fn execute_strict<O: GraphqlOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<Option<O::ResponseData>> {
        let response = self.execute::<O>(variables).await?;
        if !response.errors.is_empty() {
            return Err(ClientError::GraphqlErrors(response.errors));
        }
        Ok(response.data)
    }
}
