//! Route definitions, one module per resource group.

pub mod approvals;
pub mod formats;
pub mod health;
pub mod requests;
pub mod signatures;

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/formats", formats::router())
        .nest("/requests", requests::router())
        .nest("/approvals", approvals::router())
        .nest("/signatures", signatures::router())
        .route("/audit/me", get(audit::list_my_audit))
}
