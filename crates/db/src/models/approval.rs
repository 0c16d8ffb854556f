//! Approval step entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A row from the `approvals` table: one step of a request's approval flow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Approval {
    pub id: EntityId,
    pub request_id: EntityId,
    pub step: i32,
    pub role: String,
    /// Assigned lazily: `None` until someone acts on the step.
    pub approver_id: Option<EntityId>,
    pub status: String,
    pub comment: Option<String>,
    pub signature_url: Option<String>,
    pub signed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A pending approval joined with its owning request, for the reviewer inbox.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingApproval {
    pub id: EntityId,
    pub request_id: EntityId,
    pub step: i32,
    pub role: String,
    pub status: String,
    pub request_status: String,
    pub format_id: EntityId,
    pub requester_id: EntityId,
    pub request_data: serde_json::Value,
    pub request_created_at: Timestamp,
}

/// Request body for recording a decision on an approval step.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    pub approval_id: EntityId,
    pub comment: Option<String>,
    /// Only meaningful when approving.
    pub signature_url: Option<String>,
}
