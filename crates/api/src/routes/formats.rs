//! Route definitions for format management, nested under `/formats`.
//!
//! ```text
//! POST   /            create_format      (admin)
//! GET    /            list_formats
//! GET    /{id}        get_format
//! PUT    /{id}        update_format      (admin)
//! DELETE /{id}        delete_format      (admin, deactivates)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::format;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(format::list_formats).post(format::create_format),
        )
        .route(
            "/{id}",
            get(format::get_format)
                .put(format::update_format)
                .delete(format::delete_format),
        )
}
