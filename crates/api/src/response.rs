//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "success": true, "data": ... }` envelope per
//! project conventions. Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!({ "success": true, "data": ... })` to get compile-time
//! type safety and consistent serialization. Error responses carry the
//! matching `{ "success": false, "error": ... }` shape (see `error.rs`).

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
