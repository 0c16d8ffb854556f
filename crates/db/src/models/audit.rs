//! Audit log entity model and DTOs.
//!
//! Audit logs are immutable once created; there is no update DTO and no
//! `updated_at` column.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A single audit log entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: EntityId,
    pub request_id: EntityId,
    pub user_id: EntityId,
    pub action: String,
    pub details: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub request_id: EntityId,
    pub user_id: EntityId,
    pub action: String,
    pub details: serde_json::Value,
}
