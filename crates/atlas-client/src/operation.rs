//! Operation types and typed GraphQL traits.

use serde::{Deserialize, Serialize};

use crate::error::GraphqlError;

/// GraphQL document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphqlQuery(String);

impl GraphqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn from_static(query: &'static str) -> Self {
        Self::new(query)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Typed GraphQL operation definition.
///
/// Implement this trait for each query the client issues.
pub trait GraphqlOperation {
    type Variables: Serialize + Send + Sync;
    type ResponseData: for<'de> Deserialize<'de> + Send;

    /// GraphQL query text.
    const QUERY: &'static str;
    /// Operation name sent alongside the query.
    const OPERATION_NAME: &'static str;
}

/// Variables for parameterless operations; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyVariables {}

/// GraphQL request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    pub query: GraphqlQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub variables: V,
}

impl<V> GraphqlRequest<V> {
    pub fn new(query: GraphqlQuery, variables: V) -> Self {
        Self {
            query,
            operation_name: None,
            variables,
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Request body for a typed operation, named after it.
    pub fn for_operation<O>(variables: V) -> Self
    where
        O: GraphqlOperation<Variables = V>,
    {
        Self::new(GraphqlQuery::from_static(O::QUERY), variables)
            .with_operation_name(O::OPERATION_NAME)
    }
}

/// GraphQL response container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if no GraphQL errors were returned.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GraphqlRequest::new(GraphqlQuery::from_static("{ a }"), EmptyVariables {})
            .with_operation_name("A");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "query": "{ a }", "operationName": "A", "variables": {} })
        );
    }

    #[test]
    fn test_response_with_errors_only() {
        let response: GraphqlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"errors":[{"message":"nope"}]}"#).unwrap();
        assert!(!response.is_ok());
        assert!(response.data.is_none());
    }
}
