//! Repository for the `requests` table.

use sqlx::PgPool;
use tramita_core::status::RequestStatus;
use tramita_core::types::EntityId;

use crate::models::request::{CreateRequest, Request, RequestFilter, RequestWithFormat};
use crate::models::Page;
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, format_id, requester_id, data, status, created_at, updated_at";

/// Column list for queries joined with `formats`.
const JOINED_COLUMNS: &str = "\
    r.id, r.format_id, r.requester_id, r.data, r.status, r.created_at, r.updated_at, \
    f.name AS format_name, f.description AS format_description";

/// Provides CRUD operations for requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new draft request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        requester_id: EntityId,
        input: &CreateRequest,
    ) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (format_id, requester_id, data, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.format_id)
            .bind(requester_id)
            .bind(&input.data)
            .bind(RequestStatus::Draft.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request joined with its format's display fields.
    pub async fn find_with_format(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<RequestWithFormat>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM requests r
             JOIN formats f ON f.id = r.format_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, RequestWithFormat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a requester's own requests, newest first, with optional status
    /// and format filters plus limit/offset pagination.
    pub async fn list_for_requester(
        pool: &PgPool,
        requester_id: EntityId,
        filter: &RequestFilter,
    ) -> Result<Page<RequestWithFormat>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM requests r
             JOIN formats f ON f.id = r.format_id
             WHERE r.requester_id = $1
               AND ($2::text IS NULL OR r.status = $2)
               AND ($3::uuid IS NULL OR r.format_id = $3)
             ORDER BY r.created_at DESC
             LIMIT $4 OFFSET $5"
        );
        let items = sqlx::query_as::<_, RequestWithFormat>(&query)
            .bind(requester_id)
            .bind(&filter.status)
            .bind(filter.format_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM requests
             WHERE requester_id = $1
               AND ($2::text IS NULL OR status = $2)
               AND ($3::uuid IS NULL OR format_id = $3)",
        )
        .bind(requester_id)
        .bind(&filter.status)
        .bind(filter.format_id)
        .fetch_one(pool)
        .await?;

        Ok(Page {
            items,
            total,
            limit,
            offset,
        })
    }

    /// Replace a draft request's captured data. State and ownership checks
    /// belong to the caller; this only touches the row.
    pub async fn update_data(
        pool: &PgPool,
        id: EntityId,
        data: &serde_json::Value,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET data = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(data)
            .fetch_optional(pool)
            .await
    }
}
