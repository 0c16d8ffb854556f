//! Handlers for the caller's digital signature history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tramita_core::error::CoreError;
use tramita_db::models::signature::CreateSignature;
use tramita_db::repositories::SignatureRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/signatures
///
/// Fetch the caller's current signature, the most recently registered row.
/// Returns `data: null` when none has been registered yet.
pub async fn get_current_signature(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let signature = SignatureRepo::find_current_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::new(signature)))
}

/// POST /api/v1/signatures
///
/// Register a new signature for the caller. Prior rows are kept as history;
/// the new row becomes the current signature.
pub async fn register_signature(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSignature>,
) -> AppResult<impl IntoResponse> {
    if input.signature_image_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "signature_image_url must not be empty".into(),
        )));
    }

    let signature = SignatureRepo::insert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = %auth.user_id, signature_id = %signature.id, "Signature registered");

    Ok((StatusCode::CREATED, Json(ApiResponse::new(signature))))
}
