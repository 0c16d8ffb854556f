//! Repository for the `signatures` table.

use sqlx::PgPool;
use tramita_core::types::EntityId;

use crate::models::signature::{CreateSignature, Signature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, signature_image_url, certificate_url, created_at";

/// Provides append and lookup operations for user signatures.
pub struct SignatureRepo;

impl SignatureRepo {
    /// Register a new signature for a user, returning the created row.
    /// Prior rows are kept; this one becomes the current signature.
    pub async fn insert(
        pool: &PgPool,
        user_id: EntityId,
        input: &CreateSignature,
    ) -> Result<Signature, sqlx::Error> {
        let query = format!(
            "INSERT INTO signatures (user_id, signature_image_url, certificate_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Signature>(&query)
            .bind(user_id)
            .bind(&input.signature_image_url)
            .bind(&input.certificate_url)
            .fetch_one(pool)
            .await
    }

    /// Fetch a user's current signature: the most recent row by `created_at`.
    pub async fn find_current_for_user(
        pool: &PgPool,
        user_id: EntityId,
    ) -> Result<Option<Signature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM signatures WHERE user_id = $1
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, Signature>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
