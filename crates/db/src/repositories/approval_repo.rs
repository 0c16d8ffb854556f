//! Repository for the `approvals` table.
//!
//! Read-side queries only: every write to approvals is a workflow transition
//! and goes through [`crate::workflow::WorkflowEngine`].

use sqlx::PgPool;
use tramita_core::status::ApprovalStatus;
use tramita_core::types::EntityId;

use crate::models::approval::{Approval, PendingApproval};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "\
    id, request_id, step, role, approver_id, status, comment, \
    signature_url, signed_at, created_at";

/// Provides read operations for approval steps.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Find an approval step by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Approval>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM approvals WHERE id = $1");
        sqlx::query_as::<_, Approval>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a request's approval steps, ordered by step ascending.
    pub async fn list_for_request(
        pool: &PgPool,
        request_id: EntityId,
    ) -> Result<Vec<Approval>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM approvals WHERE request_id = $1 ORDER BY step ASC"
        );
        sqlx::query_as::<_, Approval>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }

    /// List pending approvals visible to a caller: steps already claimed by
    /// them, plus unclaimed steps matching their role. Newest requests first.
    pub async fn list_pending_for_user(
        pool: &PgPool,
        user_id: EntityId,
        role: &str,
    ) -> Result<Vec<PendingApproval>, sqlx::Error> {
        sqlx::query_as::<_, PendingApproval>(
            "SELECT
                a.id, a.request_id, a.step, a.role, a.status,
                r.status AS request_status,
                r.format_id, r.requester_id,
                r.data AS request_data,
                r.created_at AS request_created_at
             FROM approvals a
             JOIN requests r ON r.id = a.request_id
             WHERE a.status = $1
               AND r.status = 'in_review'
               AND (a.approver_id = $2 OR (a.approver_id IS NULL AND a.role = $3))
             ORDER BY r.created_at DESC, a.step ASC",
        )
        .bind(ApprovalStatus::Pending.as_str())
        .bind(user_id)
        .bind(role)
        .fetch_all(pool)
        .await
    }
}
