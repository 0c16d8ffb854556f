//! Handlers for generated PDF artifacts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use tramita_core::audit::actions;
use tramita_core::error::CoreError;
use tramita_core::pdf::render_request_pdf;
use tramita_core::types::EntityId;
use tramita_db::repositories::{DocumentRepo, RequestRepo};

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::handlers::request::ensure_request_owned;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Artifact type written for the standard request dump.
const DOCUMENT_TYPE_REQUEST_PDF: &str = "request_pdf";

/// POST /api/v1/requests/{id}/documents
///
/// Render the request's captured data as a PDF, store it, and record the
/// artifact. Each call produces a fresh artifact; earlier ones are kept.
pub async fn generate_document(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    ensure_request_owned(&state.pool, request_id, auth.user_id).await?;

    let request = RequestRepo::find_with_format(&state.pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id: request_id,
        })?;

    let bytes = render_request_pdf(
        &state.config.institution_name,
        &request.format_name,
        request_id,
        &request.data,
    )?;

    let key = format!("requests/{request_id}/{}.pdf", Uuid::new_v4());
    let file_url = state
        .object_store
        .put(&key, bytes, "application/pdf")
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let document =
        DocumentRepo::insert(&state.pool, request_id, &file_url, DOCUMENT_TYPE_REQUEST_PDF)
            .await?;

    audit::record(
        &state.pool,
        request_id,
        auth.user_id,
        actions::GENERATE_DOCUMENT,
        serde_json::json!({ "document_id": document.id }),
    );

    tracing::info!(
        user_id = %auth.user_id,
        request_id = %request_id,
        document_id = %document.id,
        "Document generated"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(document))))
}

/// GET /api/v1/requests/{id}/documents
///
/// List the request's generated artifacts, newest first.
pub async fn list_documents(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    ensure_request_owned(&state.pool, request_id, auth.user_id).await?;

    let documents = DocumentRepo::list_for_request(&state.pool, request_id).await?;
    Ok(Json(ApiResponse::new(documents)))
}
