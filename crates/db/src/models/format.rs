//! Format entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramita_core::types::{EntityId, Timestamp};

/// A form template row from the `formats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Format {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub schema: serde_json::Value,
    pub pdf_template_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new format. The schema is validated against
/// [`tramita_core::schema::FormatSchema`] before insertion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormat {
    pub name: String,
    pub description: Option<String>,
    pub schema: serde_json::Value,
    pub pdf_template_url: Option<String>,
}

/// DTO for updating an existing format. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFormat {
    pub name: Option<String>,
    pub description: Option<String>,
    pub schema: Option<serde_json::Value>,
    pub pdf_template_url: Option<String>,
    pub active: Option<bool>,
}
