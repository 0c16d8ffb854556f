//! Route definitions for the reviewer inbox, nested under `/approvals`.
//!
//! ```text
//! GET    /pending    list_pending_approvals
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::approval;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pending", get(approval::list_pending_approvals))
}
