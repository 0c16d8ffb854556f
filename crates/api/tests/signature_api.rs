//! HTTP-level integration tests for signature history endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, token_for};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn current_signature_is_null_before_registration(pool: PgPool) {
    let token = token_for(Uuid::new_v4(), "coordinator");
    let response = get(
        common::build_test_app(pool),
        "/api/v1/signatures",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_registration_becomes_current(pool: PgPool) {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id, "coordinator");

    for url in ["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/signatures",
            &token,
            serde_json::json!({ "signature_image_url": url }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(pool),
        "/api/v1/signatures",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["signature_image_url"],
        "https://cdn.example.com/b.png"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signatures_are_scoped_per_user(pool: PgPool) {
    let alice = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/signatures",
        &alice,
        serde_json::json!({ "signature_image_url": "https://cdn.example.com/alice.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let bob = token_for(Uuid::new_v4(), "director");
    let response = get(
        common::build_test_app(pool),
        "/api/v1/signatures",
        &bob,
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_signature_url_is_rejected(pool: PgPool) {
    let token = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/signatures",
        &token,
        serde_json::json!({ "signature_image_url": "  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
