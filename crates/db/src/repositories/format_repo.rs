//! Repository for the `formats` table.

use sqlx::PgPool;
use tramita_core::types::EntityId;

use crate::models::format::{CreateFormat, Format, UpdateFormat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, schema, pdf_template_url, active, created_at, updated_at";

/// Provides CRUD operations for formats.
pub struct FormatRepo;

impl FormatRepo {
    /// Insert a new format, returning the created row. The caller is
    /// responsible for validating the schema first.
    pub async fn create(pool: &PgPool, input: &CreateFormat) -> Result<Format, sqlx::Error> {
        let query = format!(
            "INSERT INTO formats (name, description, schema, pdf_template_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Format>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.schema)
            .bind(&input.pdf_template_url)
            .fetch_one(pool)
            .await
    }

    /// Find a format by its ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Format>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM formats WHERE id = $1");
        sqlx::query_as::<_, Format>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active formats, most recently created first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Format>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM formats WHERE active ORDER BY created_at DESC");
        sqlx::query_as::<_, Format>(&query).fetch_all(pool).await
    }

    /// Update a format. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateFormat,
    ) -> Result<Option<Format>, sqlx::Error> {
        let query = format!(
            "UPDATE formats SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                schema = COALESCE($4, schema),
                pdf_template_url = COALESCE($5, pdf_template_url),
                active = COALESCE($6, active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Format>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.schema)
            .bind(&input.pdf_template_url)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a format. Returns `true` if a row was deactivated.
    ///
    /// Formats are never hard-deleted: existing requests reference them.
    pub async fn deactivate(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE formats SET active = FALSE, updated_at = NOW() WHERE id = $1 AND active")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
