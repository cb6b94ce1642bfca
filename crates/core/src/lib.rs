//! # feddocs Core
//!
//! Domain types, traits, and error definitions for the feddocs query service.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The model backend is defined as a trait here; implementations live in their
//! respective crates. The topic classifier and prompt composer are pure
//! functions, so the whole query-shaping path is testable without a database
//! or a running model server.

pub mod document;
pub mod error;
pub mod message;
pub mod prompt;
pub mod provider;
pub mod topic;

// Re-export key types at crate root for ergonomics
pub use document::FederalDocument;
pub use error::{Error, Result};
pub use message::{Message, Role};
pub use prompt::ComposedPrompt;
pub use provider::{Provider, ProviderRequest, ProviderResponse};
pub use topic::match_topic;
