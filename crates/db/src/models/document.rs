//! Generated document entity model.

use serde::Serialize;
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A row from the `generated_documents` table: one rendered PDF artifact.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GeneratedDocument {
    pub id: EntityId,
    pub request_id: EntityId,
    pub file_url: String,
    pub document_type: String,
    pub created_at: Timestamp,
}
