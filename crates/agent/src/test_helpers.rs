//! Shared test helpers for orchestrator tests.

use feddocs_core::error::ProviderError;
use feddocs_core::message::Message;
use feddocs_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::sync::Mutex;

/// A mock provider that records every request and returns a scripted
/// outcome.
pub struct ScriptedProvider {
    outcome: Result<String, ProviderError>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    /// Create a provider that answers every request with `text`.
    pub fn answering(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that fails every request with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the requests seen so far.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);

        match &self.outcome {
            Ok(text) => Ok(ProviderResponse {
                message: Message::assistant(text),
                model: "mock-model".into(),
                usage: Some(Usage {
                    prompt_tokens: 10,
                    completion_tokens: 5,
                    total_tokens: 15,
                }),
            }),
            Err(error) => Err(error.clone()),
        }
    }
}
