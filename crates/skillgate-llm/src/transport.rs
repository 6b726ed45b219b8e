use async_trait::async_trait;
use skillgate_core::Result;

use crate::request::GenerationRequest;

/// Delivers a [`GenerationRequest`] to an LLM and returns the generated text.
///
/// Implemented by the embedding application (HTTP client, local model, ...).
/// Failures should be reported as `SkillgateError::Transport`.
#[async_trait]
pub trait LlmTransport: Send + Sync {
    /// Human-readable name, e.g. "gemini", "mock".
    fn name(&self) -> &str;

    /// Send the request and wait for the complete reply.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
