//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of a per-test database pool and an in-memory object store, and
//! provides request helpers that attach JWT bearer tokens.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use tramita_api::auth::jwt::{generate_access_token, JwtConfig};
use tramita_api::config::{ServerConfig, StorageConfig};
use tramita_api::router::build_app_router;
use tramita_api::state::AppState;
use tramita_api::storage::InMemoryObjectStore;
use tramita_db::models::format::CreateFormat;
use tramita_db::repositories::FormatRepo;

const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        institution_name: "Instituto Tecnológico de Puebla".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        storage: StorageConfig {
            bucket: "documents".to_string(),
            public_base_url: "memory://".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an in-memory object store.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        object_store: Arc::new(InMemoryObjectStore::new()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for the given user and role.
pub fn token_for(user_id: Uuid, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Mint an admin token for a fresh user id.
pub fn admin_token() -> String {
    token_for(Uuid::new_v4(), "admin")
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn get_unauthed(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn post_json(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(token), Some(body)).await
}

pub async fn put_json(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, path, Some(token), Some(body)).await
}

pub async fn post_empty(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, path, Some(token), None).await
}

pub async fn delete(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal valid schema with one text field and the given approval flow
/// steps. Pass `None` to omit `approvalFlow` (the default flow applies).
pub fn sample_schema(flow_steps: Option<serde_json::Value>) -> serde_json::Value {
    let mut schema = serde_json::json!({
        "fields": [
            { "name": "motivo", "label": "Motivo", "type": "text", "required": true }
        ]
    });
    if let Some(steps) = flow_steps {
        schema["approvalFlow"] = serde_json::json!({ "steps": steps });
    }
    schema
}

/// Seed a format directly through the repository, skipping HTTP.
pub async fn seed_format(pool: &PgPool, schema: serde_json::Value) -> Uuid {
    let format = FormatRepo::create(
        pool,
        &CreateFormat {
            name: "Solicitud de prueba".to_string(),
            description: None,
            schema,
            pdf_template_url: None,
        },
    )
    .await
    .expect("format creation should succeed");
    format.id
}

/// Create a draft request for `user_id` over HTTP, returning its id.
pub async fn seed_request(
    pool: &PgPool,
    format_id: Uuid,
    user_id: Uuid,
    data: serde_json::Value,
) -> Uuid {
    let token = token_for(user_id, "requester");
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/requests",
        &token,
        serde_json::json!({ "format_id": format_id, "data": data }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    Uuid::parse_str(json["data"]["id"].as_str().unwrap()).unwrap()
}
