//! Handlers for the request lifecycle: create, edit, list, and submit.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tramita_core::audit::actions;
use tramita_core::error::CoreError;
use tramita_core::status::RequestStatus;
use tramita_core::types::EntityId;
use tramita_db::models::request::{CreateRequest, Request, RequestFilter, UpdateRequestData};
use tramita_db::repositories::{FormatRepo, RequestRepo};
use tramita_db::workflow::WorkflowEngine;
use tramita_db::DbPool;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Load a request and verify the caller owns it.
///
/// Shared by the request, document, and audit handlers; all of them expose
/// requester-facing views of a single request.
pub async fn ensure_request_owned(
    pool: &DbPool,
    id: EntityId,
    user_id: EntityId,
) -> Result<Request, AppError> {
    let request = RequestRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id,
        })?;
    if request.requester_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "you do not have access to this request".into(),
        )));
    }
    Ok(request)
}

/// GET /api/v1/requests
///
/// List the caller's own requests, newest first, with optional `status` and
/// `format_id` filters plus `limit`/`offset` pagination.
pub async fn list_requests(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> AppResult<impl IntoResponse> {
    let page = RequestRepo::list_for_requester(&state.pool, auth.user_id, &filter).await?;
    Ok(Json(ApiResponse::new(page)))
}

/// POST /api/v1/requests
///
/// Create a new draft request against an active format. The requester is
/// always the authenticated caller.
pub async fn create_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    let format = FormatRepo::find_by_id(&state.pool, input.format_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Format",
            id: input.format_id,
        })?;
    if !format.active {
        return Err(AppError::BadRequest(
            "cannot create a request against an inactive format".into(),
        ));
    }

    let request = RequestRepo::create(&state.pool, auth.user_id, &input).await?;

    audit::record(
        &state.pool,
        request.id,
        auth.user_id,
        actions::CREATE_REQUEST,
        serde_json::json!({ "format_id": request.format_id }),
    );

    tracing::info!(
        user_id = %auth.user_id,
        request_id = %request.id,
        format_id = %request.format_id,
        "Request created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(request))))
}

/// GET /api/v1/requests/{id}
///
/// Fetch one of the caller's requests, joined with its format's display
/// fields.
pub async fn get_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    ensure_request_owned(&state.pool, id, auth.user_id).await?;

    let request = RequestRepo::find_with_format(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id,
        })?;
    Ok(Json(ApiResponse::new(request)))
}

/// PUT /api/v1/requests/{id}
///
/// Replace a draft request's captured data. Only the owner may edit, and
/// only while the request is still a draft.
pub async fn update_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateRequestData>,
) -> AppResult<impl IntoResponse> {
    let request = ensure_request_owned(&state.pool, id, auth.user_id).await?;

    let status = RequestStatus::parse(&request.status)?;
    if !status.can_edit() {
        return Err(AppError::Core(CoreError::InvalidState(format!(
            "cannot edit a request in status '{}'",
            request.status
        ))));
    }

    let updated = RequestRepo::update_data(&state.pool, id, &input.data)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id,
        })?;

    audit::record(
        &state.pool,
        id,
        auth.user_id,
        actions::UPDATE_REQUEST,
        serde_json::json!({}),
    );

    Ok(Json(ApiResponse::new(updated)))
}

/// POST /api/v1/requests/{id}/submit
///
/// Submit a draft request for review. Instantiates one pending approval per
/// flow step and moves the request to `in_review`.
pub async fn submit_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let request = WorkflowEngine::submit(&state.pool, id, auth.user_id).await?;

    audit::record(
        &state.pool,
        id,
        auth.user_id,
        actions::SUBMIT_REQUEST,
        serde_json::json!({ "status": request.status }),
    );

    Ok(Json(ApiResponse::new(request)))
}
