//! Handlers for format (form template) management.
//!
//! Formats are created and maintained by admins; any authenticated user can
//! browse the active catalog. Schemas are validated at save time so a broken
//! definition never reaches requesters.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tramita_core::error::CoreError;
use tramita_core::schema::FormatSchema;
use tramita_core::types::EntityId;
use tramita_db::models::format::{CreateFormat, UpdateFormat};
use tramita_db::repositories::FormatRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/formats
///
/// Create a new format. Admin only. The schema is parsed and validated
/// before anything is written.
pub async fn create_format(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateFormat>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "format name must not be empty".into(),
        )));
    }
    FormatSchema::parse(&input.schema)?.validate()?;

    let format = FormatRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        format_id = %format.id,
        name = %format.name,
        "Format created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(format))))
}

/// GET /api/v1/formats
///
/// List all active formats, most recently created first.
pub async fn list_formats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let formats = FormatRepo::list_active(&state.pool).await?;
    Ok(Json(ApiResponse::new(formats)))
}

/// GET /api/v1/formats/{id}
///
/// Fetch a single format by id, active or not.
pub async fn get_format(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let format = FormatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Format",
            id,
        })?;
    Ok(Json(ApiResponse::new(format)))
}

/// PUT /api/v1/formats/{id}
///
/// Partially update a format. Admin only. A replacement schema is validated
/// the same way as on creation.
pub async fn update_format(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateFormat>,
) -> AppResult<impl IntoResponse> {
    if let Some(schema) = &input.schema {
        FormatSchema::parse(schema)?.validate()?;
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "format name must not be empty".into(),
            )));
        }
    }

    let format = FormatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Format",
            id,
        })?;

    tracing::info!(user_id = %user.user_id, format_id = %id, "Format updated");

    Ok(Json(ApiResponse::new(format)))
}

/// DELETE /api/v1/formats/{id}
///
/// Deactivate a format. Admin only. Formats are never hard-deleted because
/// existing requests reference them; deactivation removes them from the
/// catalog while leaving history intact. Idempotent for already-inactive
/// formats.
pub async fn delete_format(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    FormatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Format",
            id,
        })?;

    FormatRepo::deactivate(&state.pool, id).await?;

    tracing::info!(user_id = %user.user_id, format_id = %id, "Format deactivated");

    Ok(Json(ApiResponse::new(serde_json::json!({
        "id": id,
        "active": false,
    }))))
}
