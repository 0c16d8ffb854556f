//! Repository for the `audit_logs` table. Insert-only plus reads; rows are
//! never updated or deleted.

use sqlx::PgPool;
use tramita_core::types::EntityId;

use crate::models::audit::{AuditLog, CreateAuditLog};
use crate::repositories::clamp_limit;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, request_id, user_id, action, details, created_at";

/// Provides insert and query operations for audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append a new audit log entry, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (request_id, user_id, action, details)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(input.request_id)
            .bind(input.user_id)
            .bind(&input.action)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// List a request's audit trail, newest first.
    pub async fn list_for_request(
        pool: &PgPool,
        request_id: EntityId,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs WHERE request_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's recent actions across all requests, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: EntityId,
        limit: Option<i64>,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs WHERE user_id = $1
             ORDER BY created_at DESC LIMIT $2"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(user_id)
            .bind(clamp_limit(limit))
            .fetch_all(pool)
            .await
    }
}
