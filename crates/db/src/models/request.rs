//! Request entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: EntityId,
    pub format_id: EntityId,
    pub requester_id: EntityId,
    pub data: serde_json::Value,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A request joined with its format's display fields, for listings and
/// detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RequestWithFormat {
    pub id: EntityId,
    pub format_id: EntityId,
    pub requester_id: EntityId,
    pub data: serde_json::Value,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub format_name: String,
    pub format_description: Option<String>,
}

/// DTO for creating a new draft request. The requester comes from the
/// authenticated caller, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub format_id: EntityId,
    pub data: serde_json::Value,
}

/// DTO for replacing a draft request's captured data.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequestData {
    pub data: serde_json::Value,
}

/// Filter parameters for listing a requester's own requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFilter {
    pub status: Option<String>,
    pub format_id: Option<EntityId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
