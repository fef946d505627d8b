//! Network capability used by [`GraphqlClient`](crate::GraphqlClient).

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Delivers one serialized GraphQL request and returns the raw response body.
///
/// Implementations report non-2xx answers as [`ClientError::HttpStatus`];
/// decoding the body is the client's job.
pub trait Transport: Send + Sync {
    fn send(&self, body: Vec<u8>) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Default headers applied to every request.
    pub headers: HeaderMap,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            headers,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP transport builder.
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    endpoint: String,
    config: HttpTransportConfig,
}

impl HttpTransportBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            config: HttpTransportConfig::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        HttpTransport::with_config(self.endpoint, self.config)
    }
}

/// POSTs requests to a fixed GraphQL endpoint with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn with_config(endpoint: impl Into<String>, config: HttpTransportConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(config.headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting GraphQL request");

        let response = self.http.post(&self.endpoint).body(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(status = status.as_u16(), bytes = bytes.len(), "GraphQL response received");

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
