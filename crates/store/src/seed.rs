//! Document table seeding pipeline.
//!
//! Creates the `federal_documents` table when missing and upserts the
//! sample documents. Idempotent: re-running against an existing table
//! updates the title only on a `document_number` conflict, leaving
//! `summary` and `publication_date` untouched.
//!
//! Runs with its own short-lived pool so it can be scheduled independently
//! of the serving process.

use feddocs_core::error::StoreError;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS federal_documents (
    id INT AUTO_INCREMENT PRIMARY KEY,
    document_number VARCHAR(255) UNIQUE,
    title TEXT,
    publication_date DATE,
    summary TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const UPSERT_SQL: &str = "\
INSERT INTO federal_documents (document_number, title, publication_date, summary) \
VALUES (?, ?, ?, ?) \
ON DUPLICATE KEY UPDATE title = VALUES(title)";

/// A document shipped with the pipeline.
pub struct SeedDocument {
    pub document_number: &'static str,
    pub title: &'static str,
    pub publication_date: &'static str,
    pub summary: &'static str,
}

/// The sample documents the pipeline maintains.
pub const SAMPLE_DOCUMENTS: [SeedDocument; 2] = [
    SeedDocument {
        document_number: "2025-001",
        title: "AI Regulation Framework",
        publication_date: "2025-01-15",
        summary: "New guidelines for AI development",
    },
    SeedDocument {
        document_number: "2025-002",
        title: "Climate Change Action Plan",
        publication_date: "2025-02-20",
        summary: "Federal climate policy updates",
    },
];

/// Create the table if needed and upsert the sample documents.
pub async fn run_pipeline(database_url: &str) -> Result<(), StoreError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(database_url)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    sqlx::raw_sql(CREATE_TABLE_SQL)
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Seed(e.to_string()))?;

    for doc in &SAMPLE_DOCUMENTS {
        sqlx::query(UPSERT_SQL)
            .bind(doc.document_number)
            .bind(doc.title)
            .bind(doc.publication_date)
            .bind(doc.summary)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::Seed(e.to_string()))?;
    }

    info!(documents = SAMPLE_DOCUMENTS.len(), "Document pipeline completed");
    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_table_matches_document_schema() {
        assert!(CREATE_TABLE_SQL.contains("document_number VARCHAR(255) UNIQUE"));
        assert!(CREATE_TABLE_SQL.contains("publication_date DATE"));
        assert!(CREATE_TABLE_SQL.contains("created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn upsert_updates_title_only_on_conflict() {
        // The conflict clause must touch nothing but the title.
        assert!(UPSERT_SQL.contains("ON DUPLICATE KEY UPDATE title = VALUES(title)"));
        assert!(!UPSERT_SQL.contains("summary = VALUES"));
        assert!(!UPSERT_SQL.contains("publication_date = VALUES"));
    }

    #[test]
    fn sample_documents_have_unique_numbers() {
        assert_ne!(
            SAMPLE_DOCUMENTS[0].document_number,
            SAMPLE_DOCUMENTS[1].document_number
        );
    }
}
