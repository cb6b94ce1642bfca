//! Provider trait — the abstraction over chat-completion backends.
//!
//! A Provider knows how to send a composed prompt to a language model and
//! get the generated text back. The production implementation talks to a
//! local Ollama server; tests substitute a scripted mock.

use crate::error::ProviderError;
use crate::message::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a provider request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "qwen2:0.5b")
    pub model: String,

    /// The messages to send (a single user-role message per query)
    pub messages: Vec<Message>,

    /// Sampling temperature. Required per call: 0.3 for answers grounded
    /// in retrieved documents, 0.7 for open-ended questions.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.7
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated message
    pub message: Message,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// The orchestrator calls `complete()` without knowing which backend is
/// being used — pure polymorphism.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "ollama").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;

    /// List available models for this provider.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_request_defaults() {
        let json = r#"{"model": "qwen2:0.5b", "messages": []}"#;
        let req: ProviderRequest = serde_json::from_str(json).unwrap();
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn provider_request_explicit_temperature() {
        let req = ProviderRequest {
            model: "qwen2:0.5b".into(),
            messages: vec![Message::user("hello")],
            temperature: 0.3,
        };
        let json = serde_json::to_string(&req).unwrap();
        let parsed: ProviderRequest = serde_json::from_str(&json).unwrap();
        assert!((parsed.temperature - 0.3).abs() < f32::EPSILON);
    }

    struct DefaultedProvider;

    #[async_trait]
    impl Provider for DefaultedProvider {
        fn name(&self) -> &str {
            "defaulted"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse {
                message: Message::assistant("ok"),
                model: "defaulted".into(),
                usage: None,
            })
        }
    }

    #[tokio::test]
    async fn trait_default_methods() {
        let provider = DefaultedProvider;
        assert!(provider.list_models().await.unwrap().is_empty());
        assert!(provider.health_check().await.unwrap());
    }
}
