//! Route definitions for the request lifecycle, nested under `/requests`.
//!
//! ```text
//! GET    /                   list_requests
//! POST   /                   create_request
//! GET    /{id}               get_request
//! PUT    /{id}               update_request
//! POST   /{id}/submit        submit_request
//! GET    /{id}/approvals     list_request_approvals
//! POST   /{id}/review        approve_request
//! PUT    /{id}/review        reject_request
//! POST   /{id}/documents     generate_document
//! GET    /{id}/documents     list_documents
//! GET    /{id}/audit         list_request_audit
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{approval, audit, document, request};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(request::list_requests).post(request::create_request),
        )
        .route(
            "/{id}",
            get(request::get_request).put(request::update_request),
        )
        .route("/{id}/submit", post(request::submit_request))
        .route("/{id}/approvals", get(approval::list_request_approvals))
        .route(
            "/{id}/review",
            post(approval::approve_request).put(approval::reject_request),
        )
        .route(
            "/{id}/documents",
            get(document::list_documents).post(document::generate_document),
        )
        .route("/{id}/audit", get(audit::list_request_audit))
}
