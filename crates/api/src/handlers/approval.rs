//! Handlers for the approval workflow: listing a request's steps, recording
//! decisions, and the reviewer's pending inbox.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use tramita_core::audit::actions;
use tramita_core::error::CoreError;
use tramita_core::status::Decision;
use tramita_core::types::EntityId;
use tramita_db::models::approval::DecisionRequest;
use tramita_db::repositories::{ApprovalRepo, RequestRepo};
use tramita_db::workflow::WorkflowEngine;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/requests/{id}/approvals
///
/// List a request's approval steps in flow order. Visible to any
/// authenticated user so reviewers can see the chain they are part of.
pub async fn list_request_approvals(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    RequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id: request_id,
        })?;

    let approvals = ApprovalRepo::list_for_request(&state.pool, request_id).await?;
    Ok(Json(ApiResponse::new(approvals)))
}

/// POST /api/v1/requests/{id}/review
///
/// Approve an approval step of the request. When this was the last pending
/// step, the request moves to `approved`.
pub async fn approve_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    record_decision(&state, request_id, auth, Decision::Approved, input).await
}

/// PUT /api/v1/requests/{id}/review
///
/// Reject an approval step of the request. Rejection short-circuits: the
/// request moves to `rejected` immediately, regardless of other steps.
pub async fn reject_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    record_decision(&state, request_id, auth, Decision::Rejected, input).await
}

/// Shared body of the two review endpoints.
async fn record_decision(
    state: &AppState,
    request_id: EntityId,
    auth: AuthUser,
    decision: Decision,
    input: DecisionRequest,
) -> AppResult<Json<ApiResponse<tramita_db::models::approval::Approval>>> {
    let approval = ApprovalRepo::find_by_id(&state.pool, input.approval_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Approval",
            id: input.approval_id,
        })?;
    if approval.request_id != request_id {
        return Err(AppError::BadRequest(
            "approval does not belong to this request".into(),
        ));
    }

    let approval = WorkflowEngine::record_decision(
        &state.pool,
        input.approval_id,
        auth.user_id,
        decision,
        input.comment.as_deref(),
        input.signature_url.as_deref(),
    )
    .await?;

    let action = match decision {
        Decision::Approved => actions::APPROVE_REQUEST,
        Decision::Rejected => actions::REJECT_REQUEST,
    };
    audit::record(
        &state.pool,
        request_id,
        auth.user_id,
        action,
        serde_json::json!({
            "approval_id": approval.id,
            "step": approval.step,
        }),
    );

    tracing::info!(
        user_id = %auth.user_id,
        request_id = %request_id,
        approval_id = %approval.id,
        step = approval.step,
        decision = ?decision,
        "Decision recorded"
    );

    Ok(Json(ApiResponse::new(approval)))
}

/// GET /api/v1/approvals/pending
///
/// The reviewer's inbox: pending steps already claimed by the caller, plus
/// unclaimed steps matching the caller's role, on requests still in review.
pub async fn list_pending_approvals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pending =
        ApprovalRepo::list_pending_for_user(&state.pool, auth.user_id, &auth.role).await?;
    Ok(Json(ApiResponse::new(pending)))
}
