//! The approval workflow engine.
//!
//! Derives a request's approval flow from its format, instantiates per-step
//! approval records at submission, and advances the request status as steps
//! are decided. Every multi-row transition runs in a single transaction so a
//! request's cached status can never drift from its approval rows, and two
//! concurrent decisions on sibling steps serialize on the request row lock.

use sqlx::{PgConnection, PgPool};
use tramita_core::error::CoreError;
use tramita_core::flow::ApprovalFlow;
use tramita_core::schema::resolve_flow_from_value;
use tramita_core::status::{ApprovalStatus, Decision, RequestStatus};
use tramita_core::types::EntityId;

use crate::models::approval::Approval;
use crate::models::request::Request;
use crate::repositories::approval_repo;

/// Errors surfaced by workflow transitions: either a domain rule violation
/// or an underlying database failure.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

const REQUEST_COLUMNS: &str = "id, format_id, requester_id, data, status, created_at, updated_at";

/// The approval workflow engine. Stateless; all methods take the pool.
pub struct WorkflowEngine;

impl WorkflowEngine {
    /// Resolve the approval flow for a format.
    ///
    /// A missing format or an absent/malformed embedded flow degrades to the
    /// default single-step `coordinator` flow; only infrastructure failures
    /// propagate. Request submission is never blocked by a format-level flow
    /// problem.
    pub async fn resolve_flow(
        pool: &PgPool,
        format_id: EntityId,
    ) -> Result<ApprovalFlow, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        resolve_flow_on(&mut conn, format_id).await
    }

    /// Submit a draft request for review.
    ///
    /// In one transaction: verifies ownership and draft state, flips the
    /// request to `in_review`, and bulk-creates one `pending`, unassigned
    /// approval row per flow step, in flow order. Approvals are instantiated
    /// here, at submission, so drafts carry no approval rows that would need
    /// deletion on edit.
    pub async fn submit(
        pool: &PgPool,
        request_id: EntityId,
        actor: EntityId,
    ) -> Result<Request, WorkflowError> {
        let mut tx = pool.begin().await?;

        let request = lock_request(&mut tx, request_id).await?;
        if request.requester_id != actor {
            return Err(CoreError::Forbidden(
                "only the requester may submit this request".into(),
            )
            .into());
        }
        let status = RequestStatus::parse(&request.status)?;
        if !status.can_submit() {
            return Err(CoreError::InvalidState(format!(
                "cannot submit a request in status '{}'",
                request.status
            ))
            .into());
        }

        let flow = resolve_flow_on(&mut tx, request.format_id).await?;

        let updated = set_request_status(&mut tx, request_id, RequestStatus::InReview).await?;

        for step in &flow.steps {
            sqlx::query(
                "INSERT INTO approvals (request_id, step, role, status)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(request_id)
            .bind(step.step)
            .bind(&step.role)
            .bind(ApprovalStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            request_id = %request_id,
            steps = flow.steps.len(),
            "Request submitted for review"
        );
        Ok(updated)
    }

    /// Record a reviewer's decision on an approval step.
    ///
    /// In one transaction: loads the approval and its request under row
    /// locks, enforces the assignment rule (`approver_id` unset means any
    /// caller may claim the step by acting; set means only that caller may
    /// act), requires the step pending and the request in review, writes the
    /// decision, then advances the request: rejection short-circuits to
    /// `rejected`; approval recomputes from the remaining pending siblings,
    /// none left means `approved`, otherwise `in_review`.
    pub async fn record_decision(
        pool: &PgPool,
        approval_id: EntityId,
        actor: EntityId,
        decision: Decision,
        comment: Option<&str>,
        signature_url: Option<&str>,
    ) -> Result<Approval, WorkflowError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {} FROM approvals WHERE id = $1 FOR UPDATE",
            approval_repo::COLUMNS
        );
        let approval = sqlx::query_as::<_, Approval>(&query)
            .bind(approval_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Approval",
                id: approval_id,
            })?;

        if let Some(assigned) = approval.approver_id {
            if assigned != actor {
                return Err(CoreError::Forbidden(
                    "you are not the assigned approver for this step".into(),
                )
                .into());
            }
        }
        if ApprovalStatus::parse(&approval.status)? != ApprovalStatus::Pending {
            return Err(CoreError::Conflict(format!(
                "approval step {} has already been decided",
                approval.step
            ))
            .into());
        }

        // Lock the request row too: sibling decisions serialize here, which
        // makes the pending-count recomputation below race-free.
        let request = lock_request(&mut tx, approval.request_id).await?;
        let request_status = RequestStatus::parse(&request.status)?;
        if !request_status.accepts_decisions() {
            return Err(CoreError::InvalidState(format!(
                "request is in status '{}' and no longer accepts decisions",
                request.status
            ))
            .into());
        }

        let new_status = decision.as_approval_status();
        let update = format!(
            "UPDATE approvals SET
                status = $2,
                approver_id = $3,
                comment = $4,
                signature_url = CASE WHEN $5 THEN $6 ELSE signature_url END,
                signed_at = NOW()
             WHERE id = $1
             RETURNING {}",
            approval_repo::COLUMNS
        );
        let decided = sqlx::query_as::<_, Approval>(&update)
            .bind(approval_id)
            .bind(new_status.as_str())
            .bind(actor)
            .bind(comment)
            .bind(decision == Decision::Approved)
            .bind(signature_url)
            .fetch_one(&mut *tx)
            .await?;

        match decision {
            Decision::Rejected => {
                set_request_status(&mut tx, approval.request_id, RequestStatus::Rejected).await?;
            }
            Decision::Approved => {
                let pending: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM approvals WHERE request_id = $1 AND status = $2",
                )
                .bind(approval.request_id)
                .bind(ApprovalStatus::Pending.as_str())
                .fetch_one(&mut *tx)
                .await?;

                let next = if pending == 0 {
                    RequestStatus::Approved
                } else {
                    RequestStatus::InReview
                };
                set_request_status(&mut tx, approval.request_id, next).await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            approval_id = %approval_id,
            request_id = %approval.request_id,
            step = approval.step,
            decision = new_status.as_str(),
            "Approval decision recorded"
        );
        Ok(decided)
    }
}

/// Resolve a format's flow on an arbitrary connection (pool or transaction).
async fn resolve_flow_on(
    conn: &mut PgConnection,
    format_id: EntityId,
) -> Result<ApprovalFlow, sqlx::Error> {
    let schema: Option<serde_json::Value> =
        sqlx::query_scalar("SELECT schema FROM formats WHERE id = $1")
            .bind(format_id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(match schema {
        Some(schema) => resolve_flow_from_value(&schema),
        None => ApprovalFlow::default_flow(),
    })
}

/// Fetch a request under `FOR UPDATE`, erroring if it does not exist.
async fn lock_request(
    conn: &mut PgConnection,
    request_id: EntityId,
) -> Result<Request, WorkflowError> {
    let query = format!("SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1 FOR UPDATE");
    sqlx::query_as::<_, Request>(&query)
        .bind(request_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Request",
                id: request_id,
            }
            .into()
        })
}

async fn set_request_status(
    conn: &mut PgConnection,
    request_id: EntityId,
    status: RequestStatus,
) -> Result<Request, sqlx::Error> {
    let query = format!(
        "UPDATE requests SET status = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING {REQUEST_COLUMNS}"
    );
    sqlx::query_as::<_, Request>(&query)
        .bind(request_id)
        .bind(status.as_str())
        .fetch_one(&mut *conn)
        .await
}
