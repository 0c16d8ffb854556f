//! Digital signature entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A row from the `signatures` table. Rows form an append-only history; the
/// current signature is the most recent row by `created_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Signature {
    pub id: EntityId,
    pub user_id: EntityId,
    pub signature_image_url: String,
    pub certificate_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a new signature for the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignature {
    pub signature_image_url: String,
    pub certificate_url: Option<String>,
}
