use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for atlas-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// GraphQL error location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// GraphQL error entry from a response `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<GraphqlErrorLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }
}

/// Error types that can occur while talking to a GraphQL endpoint.
///
/// The `Display` output is what users see for a failed fetch, so every
/// variant renders a readable sentence rather than a debug dump.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Network/transport failure (DNS, connect, timeout, TLS)
    Http(String),

    /// Server answered with a non-2xx status
    HttpStatus { status: u16, body: String },

    /// Request or response body was not the expected JSON
    Json(String),

    /// Server returned a GraphQL `errors` payload
    GraphqlErrors(Vec<GraphqlError>),

    /// Transport misbehaved in a way that is not a network error
    Protocol(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(msg) => write!(f, "{}", msg),
            ClientError::HttpStatus { status, .. } => {
                write!(f, "Response not successful: Received status code {}", status)
            }
            ClientError::Json(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::GraphqlErrors(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", messages.join("\n"))
            }
            ClientError::Protocol(msg) => write!(f, "GraphQL protocol error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json(err.to_string())
    }
}
