//! Model-serving integration for feddocs.
//!
//! [`OllamaProvider`] implements the `feddocs_core::Provider` trait against
//! a local Ollama server; [`serve`] makes sure that server is running
//! before the gateway starts taking requests.

pub mod ollama;
pub mod serve;

pub use ollama::OllamaProvider;
pub use serve::{ServerStatus, ensure_server};
