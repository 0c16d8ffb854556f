//! Fire-and-forget audit trail recording.
//!
//! Audit writes must never fail the request that triggered them. [`record`]
//! redacts sensitive fields, spawns the insert on a background task, and logs
//! a warning if the write fails.

use tramita_core::audit::redact_sensitive_fields;
use tramita_core::types::EntityId;
use tramita_db::models::audit::CreateAuditLog;
use tramita_db::repositories::AuditLogRepo;
use tramita_db::DbPool;

/// Record an audit log entry without blocking the caller.
///
/// `details` is redacted before it is persisted. Failures are logged and
/// swallowed; the originating request continues regardless.
pub fn record(
    pool: &DbPool,
    request_id: EntityId,
    user_id: EntityId,
    action: &str,
    details: serde_json::Value,
) {
    let pool = pool.clone();
    let input = CreateAuditLog {
        request_id,
        user_id,
        action: action.to_string(),
        details: redact_sensitive_fields(&details),
    };
    tokio::spawn(async move {
        if let Err(err) = AuditLogRepo::insert(&pool, &input).await {
            tracing::warn!(
                error = %err,
                request_id = %input.request_id,
                action = %input.action,
                "failed to record audit log entry"
            );
        }
    });
}
