//! Route definitions for signature history, nested under `/signatures`.
//!
//! ```text
//! GET    /    get_current_signature
//! POST   /    register_signature
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::signature;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(signature::get_current_signature).post(signature::register_signature),
    )
}
