//! Repository for the `generated_documents` table.

use sqlx::PgPool;
use tramita_core::types::EntityId;

use crate::models::document::GeneratedDocument;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, request_id, file_url, document_type, created_at";

/// Provides append and listing operations for generated document artifacts.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Record a newly stored artifact, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        request_id: EntityId,
        file_url: &str,
        document_type: &str,
    ) -> Result<GeneratedDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_documents (request_id, file_url, document_type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedDocument>(&query)
            .bind(request_id)
            .bind(file_url)
            .bind(document_type)
            .fetch_one(pool)
            .await
    }

    /// List a request's artifacts, newest first.
    pub async fn list_for_request(
        pool: &PgPool,
        request_id: EntityId,
    ) -> Result<Vec<GeneratedDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_documents
             WHERE request_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GeneratedDocument>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }
}
