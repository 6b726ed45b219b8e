//! Mock transport for deterministic testing.
//!
//! Returns pre-configured responses without touching the network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::request::GenerationRequest;
use crate::transport::LlmTransport;
use skillgate_core::{Result, SkillgateError};

/// A transport that replays queued responses and records every request.
///
/// # Example
/// ```
/// use skillgate_llm::MockTransport;
/// let transport = MockTransport::new("test")
///     .with_response("Hello, world!");
/// ```
pub struct MockTransport {
    responses: Arc<Mutex<Vec<MockResponse>>>,
    /// Every request received, in order.
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    name: String,
}

/// A pre-configured reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    Error(String),
}

impl MockTransport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![])),
            requests: Arc::new(Mutex::new(vec![])),
            name: name.into(),
        }
    }

    /// Queue a text reply.
    pub fn with_response(self, text: &str) -> Self {
        self.queue(MockResponse::Text(text.to_string()));
        self
    }

    /// Queue a transport failure.
    pub fn with_error(self, error: &str) -> Self {
        self.queue(MockResponse::Error(error.to_string()));
        self
    }

    pub fn queue(&self, response: MockResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push(response);
        }
    }

    /// Snapshot of all requests received so far.
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Pop the next queued response, or a placeholder when the queue is empty.
    fn next_response(&self) -> MockResponse {
        match self.responses.lock() {
            Ok(mut responses) if !responses.is_empty() => responses.remove(0),
            _ => MockResponse::Text("(mock: no more queued responses)".to_string()),
        }
    }
}

#[async_trait]
impl LlmTransport for MockTransport {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.next_response() {
            MockResponse::Text(text) => Ok(text),
            MockResponse::Error(error) => Err(SkillgateError::Transport(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GenerationConfig;

    fn request(text: &str) -> GenerationRequest {
        GenerationRequest::user_only("test", GenerationConfig::default(), text)
    }

    #[tokio::test]
    async fn test_mock_text_response() {
        let transport = MockTransport::new("mock").with_response("Hello!");
        let reply = transport.generate(&request("hi")).await.unwrap();
        assert_eq!(reply, "Hello!");
    }

    #[tokio::test]
    async fn test_mock_error() {
        let transport = MockTransport::new("mock").with_error("HTTP 429: rate limited");
        let err = transport.generate(&request("hi")).await.unwrap_err();
        assert!(matches!(err, SkillgateError::Transport(_)));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let transport = MockTransport::new("mock").with_response("ok");
        let req = request("hello").with_system_instruction("be nice");
        let _ = transport.generate(&req).await;

        let recorded = transport.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].system_instruction.as_deref(), Some("be nice"));
    }

    #[tokio::test]
    async fn test_mock_multiple_responses_in_order() {
        let transport = MockTransport::new("mock")
            .with_response("first")
            .with_response("second");
        assert_eq!(transport.generate(&request("a")).await.unwrap(), "first");
        assert_eq!(transport.generate(&request("b")).await.unwrap(), "second");
        assert!(transport.generate(&request("c")).await.unwrap().contains("no more queued"));
    }
}
