//! Handlers for reading the audit trail.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tramita_core::types::EntityId;
use tramita_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::handlers::request::ensure_request_owned;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/requests/{id}/audit
///
/// A request's audit trail, newest first. Owner only.
pub async fn list_request_audit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    ensure_request_owned(&state.pool, request_id, auth.user_id).await?;

    let entries = AuditLogRepo::list_for_request(&state.pool, request_id).await?;
    Ok(Json(ApiResponse::new(entries)))
}

/// GET /api/v1/audit/me
///
/// The caller's recent actions across all requests, newest first.
pub async fn list_my_audit(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = AuditLogRepo::list_for_user(&state.pool, auth.user_id, query.limit).await?;
    Ok(Json(ApiResponse::new(entries)))
}
