//! HTTP-level integration tests for the audit trail endpoints.
//!
//! Audit writes are fire-and-forget (spawned off the request path), so these
//! tests wait briefly before reading the trail back.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, put_json, sample_schema, token_for};
use sqlx::PgPool;
use uuid::Uuid;

/// Give spawned audit inserts time to land.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(200)).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lifecycle_actions_appear_in_the_request_trail(pool: PgPool) {
    let format_id = common::seed_format(&pool, sample_schema(None)).await;
    let user_id = Uuid::new_v4();
    let request_id =
        common::seed_request(&pool, format_id, user_id, serde_json::json!({"motivo": "x"})).await;

    let token = token_for(user_id, "requester");
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}"),
        &token,
        serde_json::json!({ "data": { "motivo": "y" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_empty(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/submit"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    settle().await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/audit"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let actions: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert!(actions.contains(&"CREATE_REQUEST"));
    assert!(actions.contains(&"UPDATE_REQUEST"));
    assert!(actions.contains(&"SUBMIT_REQUEST"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn audit_trail_is_owner_only(pool: PgPool) {
    let format_id = common::seed_format(&pool, sample_schema(None)).await;
    let owner = Uuid::new_v4();
    let request_id = common::seed_request(&pool, format_id, owner, serde_json::json!({})).await;

    let stranger = token_for(Uuid::new_v4(), "requester");
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/audit"),
        &stranger,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn my_audit_lists_only_the_callers_actions(pool: PgPool) {
    let format_id = common::seed_format(&pool, sample_schema(None)).await;
    let alice = Uuid::new_v4();
    common::seed_request(&pool, format_id, alice, serde_json::json!({})).await;
    let bob = Uuid::new_v4();
    common::seed_request(&pool, format_id, bob, serde_json::json!({})).await;

    settle().await;

    let token = token_for(alice, "requester");
    let response = get(common::build_test_app(pool), "/api/v1/audit/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["user_id"], alice.to_string());
    assert_eq!(entries[0]["action"], "CREATE_REQUEST");
}
