//! Prompt composition — the exact text and sampling policy sent to the model.
//!
//! Pure functions, no side effects. Two modes:
//!
//! - **Grounded**: the query plus a digest of retrieved documents, sampled
//!   at a low temperature for factual answers.
//! - **Ungrounded**: the raw query unchanged, sampled at a higher
//!   temperature for open-ended answers.

/// Temperature for answers grounded in retrieved documents.
pub const FACTUAL_TEMPERATURE: f32 = 0.3;

/// Temperature for open-ended answers with no document context.
pub const CREATIVE_TEMPERATURE: f32 = 0.7;

/// The text sent to the model together with its sampling temperature.
///
/// The temperature is part of the composed prompt, not a global default:
/// it is passed to the provider on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    /// The full prompt text
    pub text: String,

    /// Sampling temperature to use for this call
    pub temperature: f32,
}

/// Compose a grounded prompt from the user query and a document digest.
///
/// The digest is embedded verbatim — it may be a rendered document list or
/// one of the accessor's sentinel strings; composition does not care which.
pub fn grounded(query: &str, digest: &str) -> ComposedPrompt {
    ComposedPrompt {
        text: format!(
            "User question: {query}\n\n\
             Relevant federal documents:\n{digest}\n\n\
             Please provide a concise answer based on these documents."
        ),
        temperature: FACTUAL_TEMPERATURE,
    }
}

/// Compose an ungrounded prompt: the raw query, unchanged.
pub fn ungrounded(query: &str) -> ComposedPrompt {
    ComposedPrompt {
        text: query.to_string(),
        temperature: CREATIVE_TEMPERATURE,
    }
}
