//! Document digest rendering.
//!
//! The digest is the text block embedded into grounded prompts. It is
//! always a string: lookup results render as a bullet list, and every
//! failure mode collapses into a sentinel string instead of an error, so
//! the orchestrator forwards whatever comes back without branching.

use crate::DocumentStore;
use feddocs_core::document::FederalDocument;
use tracing::warn;

/// Maximum number of documents rendered into a digest (matches the SQL cap).
pub const MAX_DOCUMENTS: usize = 5;

/// Summary excerpt length in characters.
pub const SUMMARY_EXCERPT_CHARS: usize = 150;

/// Sentinel returned when no store handle is available.
pub const DB_UNAVAILABLE: &str = "Database connection not available";

/// Retrieve the digest for `keyword`.
///
/// Never fails: a missing store, an empty result, and a store fault each
/// produce their sentinel string. Faults are logged here and absorbed —
/// nothing store-related propagates past this function.
pub async fn retrieve(store: Option<&DocumentStore>, keyword: &str) -> String {
    let Some(store) = store else {
        return DB_UNAVAILABLE.to_string();
    };

    match store.search_documents(keyword).await {
        Ok(rows) if rows.is_empty() => format!("No documents found containing '{keyword}'"),
        Ok(rows) => render_rows(&rows),
        Err(e) => {
            warn!(error = %e, keyword, "Document retrieval failed");
            format!("Error retrieving documents: {e}")
        }
    }
}

/// Render rows as a newline-joined bullet list.
pub fn render_rows(rows: &[FederalDocument]) -> String {
    rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

/// Render one document line.
///
/// The summary excerpt is capped at [`SUMMARY_EXCERPT_CHARS`] characters
/// and the `...` marker is appended unconditionally — also when the
/// summary was short enough to fit whole.
fn render_row(doc: &FederalDocument) -> String {
    let excerpt: String = doc.summary.chars().take(SUMMARY_EXCERPT_CHARS).collect();
    format!(
        "• {} ({}): {}...",
        doc.title, doc.publication_date, excerpt
    )
}
