//! Federal document domain types.
//!
//! Documents live in the `federal_documents` table:
//! `id` (auto-increment PK), `document_number` (unique), `title`,
//! `publication_date`, `summary`, `created_at`. Queries only ever read the
//! three presentation columns, so that is all the value object carries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A federal document row as retrieved for query grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalDocument {
    /// Document title
    pub title: String,

    /// Date the document was published
    pub publication_date: NaiveDate,

    /// Abstract / summary text
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serialization_roundtrip() {
        let doc = FederalDocument {
            title: "AI Regulation Framework".into(),
            publication_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            summary: "New guidelines for AI development".into(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: FederalDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn publication_date_displays_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        assert_eq!(date.to_string(), "2025-02-20");
    }
}
