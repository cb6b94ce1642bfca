//! Query orchestration — the heart of feddocs.
//!
//! One query flows through a fixed pipeline:
//!
//! 1. **Receive** the query; reject it when empty after trimming
//! 2. **Classify** it against the topic vocabulary (one scan)
//! 3. **Fetch** a document digest when a topic matched; skip the store
//!    entirely otherwise
//! 4. **Compose** the prompt and its temperature for the branch taken
//! 5. **Dispatch** to the model provider
//! 6. **Respond** with the model's text unchanged
//!
//! Store faults were already absorbed into the digest string by the
//! accessor, so the fetch stage cannot fail. Provider faults are absorbed
//! here into an apology string — the caller always gets text back for a
//! valid query.

use feddocs_core::error::Error;
use feddocs_core::message::Message;
use feddocs_core::prompt;
use feddocs_core::provider::{Provider, ProviderRequest};
use feddocs_core::topic::match_topic;
use feddocs_store::{DocumentStore, digest};
use std::sync::Arc;
use tracing::{debug, error, info};

#[cfg(test)]
pub(crate) mod test_helpers;

/// The query agent: classify, optionally ground, dispatch, respond.
pub struct QueryAgent {
    /// Model provider.
    provider: Arc<dyn Provider>,
    /// Document store handle; `None` until the store is initialized, in
    /// which case grounded queries receive the availability sentinel.
    store: Option<Arc<DocumentStore>>,
    /// Model name passed on every call.
    model: String,
}

impl QueryAgent {
    /// Create a new query agent.
    pub fn new(
        provider: Arc<dyn Provider>,
        store: Option<Arc<DocumentStore>>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            model: model.into(),
        }
    }

    /// Answer a user query.
    ///
    /// Returns `Err(Error::Validation)` only for an empty (post-trim)
    /// query. Every other outcome — including a provider fault — is an
    /// `Ok` string, so transport layers map it straight into a success
    /// response body.
    pub async fn answer(&self, query: &str) -> Result<String, Error> {
        if query.trim().is_empty() {
            return Err(Error::Validation("Query cannot be empty".into()));
        }

        let composed = match match_topic(query) {
            Some(topic) => {
                debug!(topic, "Query matched topic vocabulary, grounding in documents");
                let digest = digest::retrieve(self.store.as_deref(), topic).await;
                prompt::grounded(query, &digest)
            }
            None => {
                debug!("No topic matched, sending raw query");
                prompt::ungrounded(query)
            }
        };

        let request = ProviderRequest {
            model: self.model.clone(),
            messages: vec![Message::user(&composed.text)],
            temperature: composed.temperature,
        };

        match self.provider.complete(request).await {
            Ok(response) => {
                info!(
                    model = %response.model,
                    answer_len = response.message.content.len(),
                    "Query answered"
                );
                Ok(response.message.content)
            }
            Err(e) => {
                error!(error = %e, "Model call failed");
                Ok(format!(
                    "Sorry, I encountered an error processing your request: {e}"
                ))
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
