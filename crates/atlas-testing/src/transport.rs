//! Scripted transport for fetcher and shell tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use atlas_client::{ClientError, Transport};
use tokio::sync::Notify;

/// Holds the next request until released.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    notify: Arc<Notify>,
}

impl Gate {
    /// Let one held (or the next) request through.
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// Transport that answers from a queue and records what it was sent.
///
/// When the queue runs dry every further request fails, so a test that
/// expects a single request notices a second one.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<Vec<u8>, ClientError>>>>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    calls: Arc<AtomicUsize>,
    gate: Option<Gate>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body.
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.push(Ok(body.into().into_bytes()))
    }

    /// Queue a transport failure.
    pub fn fail(self, err: ClientError) -> Self {
        self.push(Err(err))
    }

    /// Make requests wait until the returned gate is released.
    pub fn gated(mut self) -> (Self, Gate) {
        let gate = Gate::default();
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Request bodies received so far, decoded as JSON.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn push(self, response: Result<Vec<u8>, ClientError>) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    fn next_response(&self) -> Result<Vec<u8>, ClientError> {
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| {
                Err(ClientError::Protocol(
                    "fake transport has no scripted response".to_string(),
                ))
            })
    }
}

impl Transport for FakeTransport {
    async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(value) = serde_json::from_slice(&body)
            && let Ok(mut requests) = self.requests.lock()
        {
            requests.push(value);
        }

        if let Some(gate) = &self.gate {
            gate.notify.notified().await;
        }

        self.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_is_consumed_in_order() {
        let transport = FakeTransport::new().respond("first").respond("second");

        assert_eq!(transport.send(b"{}".to_vec()).await.unwrap(), b"first");
        assert_eq!(transport.send(b"{}".to_vec()).await.unwrap(), b"second");
        assert!(transport.send(b"{}".to_vec()).await.is_err());
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_records_request_bodies() {
        let transport = FakeTransport::new().respond("{}");
        transport.send(br#"{"query":"{ a }"}"#.to_vec()).await.unwrap();
        assert_eq!(transport.requests()[0]["query"], "{ a }");
    }
}
