//! HTTP-level integration tests for the approval workflow endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json, put_json, sample_schema, token_for};
use sqlx::PgPool;
use uuid::Uuid;

fn two_step_flow() -> serde_json::Value {
    sample_schema(Some(serde_json::json!([
        { "step": 1, "role": "coordinator" },
        { "step": 2, "role": "director" }
    ])))
}

/// Seed a format, create a request for a fresh user, and submit it.
/// Returns `(request_id, owner_id, approval ids in step order)`.
async fn submitted_request(pool: &PgPool, schema: serde_json::Value) -> (Uuid, Uuid, Vec<Uuid>) {
    let format_id = common::seed_format(pool, schema).await;
    let owner = Uuid::new_v4();
    let request_id = common::seed_request(pool, format_id, owner, serde_json::json!({})).await;

    let token = token_for(owner, "requester");
    let response = post_empty(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/submit"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/approvals"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let approvals = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| Uuid::parse_str(a["id"].as_str().unwrap()).unwrap())
        .collect();

    (request_id, owner, approvals)
}

async fn request_status(pool: &PgPool, request_id: Uuid, owner: Uuid) -> String {
    let token = token_for(owner, "requester");
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    json["data"]["status"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_creates_pending_steps_in_order(pool: PgPool) {
    let (request_id, owner, approvals) = submitted_request(&pool, two_step_flow()).await;
    assert_eq!(approvals.len(), 2);

    let token = token_for(owner, "requester");
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/approvals"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let steps = json["data"].as_array().unwrap();
    assert_eq!(steps[0]["step"], 1);
    assert_eq!(steps[0]["role"], "coordinator");
    assert_eq!(steps[0]["status"], "pending");
    assert!(steps[0]["approver_id"].is_null());
    assert_eq!(steps[1]["step"], 2);
    assert_eq!(steps[1]["role"], "director");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn flowless_schema_gets_default_single_step(pool: PgPool) {
    let (_, _, approvals) = submitted_request(&pool, sample_schema(None)).await;
    assert_eq!(approvals.len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_approval_keeps_request_in_review(pool: PgPool) {
    let (request_id, owner, approvals) = submitted_request(&pool, two_step_flow()).await;

    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({
            "approval_id": approvals[0],
            "comment": "Visto bueno",
            "signature_url": "https://cdn.example.com/sig.png",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["comment"], "Visto bueno");
    assert!(json["data"]["signed_at"].is_string());

    assert_eq!(request_status(&pool, request_id, owner).await, "in_review");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn last_approval_moves_request_to_approved(pool: PgPool) {
    let (request_id, owner, approvals) = submitted_request(&pool, two_step_flow()).await;

    for (approval_id, role) in approvals.iter().zip(["coordinator", "director"]) {
        let token = token_for(Uuid::new_v4(), role);
        let response = post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/requests/{request_id}/review"),
            &token,
            serde_json::json!({ "approval_id": approval_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(request_status(&pool, request_id, owner).await, "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejection_short_circuits_the_request(pool: PgPool) {
    let (request_id, owner, approvals) = submitted_request(&pool, two_step_flow()).await;

    let director = token_for(Uuid::new_v4(), "director");
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/review"),
        &director,
        serde_json::json!({
            "approval_id": approvals[1],
            "comment": "Documentación incompleta",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");

    assert_eq!(request_status(&pool, request_id, owner).await, "rejected");

    // Sibling decisions after the short-circuit are rejected.
    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": approvals[0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn double_decision_on_same_step_conflicts(pool: PgPool) {
    let (request_id, _, approvals) = submitted_request(&pool, two_step_flow()).await;

    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": approvals[0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": approvals[0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approval_must_belong_to_the_request_in_the_path(pool: PgPool) {
    let (_, _, approvals) = submitted_request(&pool, two_step_flow()).await;
    let (other_request, _, _) = submitted_request(&pool, two_step_flow()).await;

    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{other_request}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": approvals[0] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_approval_returns_404(pool: PgPool) {
    let (request_id, _, _) = submitted_request(&pool, two_step_flow()).await;

    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": Uuid::new_v4() }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pending_inbox_is_scoped_by_role(pool: PgPool) {
    let (request_id, _, _) = submitted_request(&pool, two_step_flow()).await;

    let coordinator = token_for(Uuid::new_v4(), "coordinator");
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/approvals/pending",
        &coordinator,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let inbox = json["data"].as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["request_id"], request_id.to_string());
    assert_eq!(inbox[0]["step"], 1);

    // A role outside the flow sees nothing.
    let stranger = token_for(Uuid::new_v4(), "requester");
    let response = get(
        common::build_test_app(pool),
        "/api/v1/approvals/pending",
        &stranger,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn decided_step_leaves_the_inbox(pool: PgPool) {
    let (request_id, _, approvals) = submitted_request(&pool, two_step_flow()).await;

    let coordinator_id = Uuid::new_v4();
    let coordinator = token_for(coordinator_id, "coordinator");
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/requests/{request_id}/review"),
        &coordinator,
        serde_json::json!({ "approval_id": approvals[0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/approvals/pending",
        &coordinator,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
