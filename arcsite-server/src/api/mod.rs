//! HTTP API, mounted under `/api/v1`.

pub mod admin;
pub mod extractors;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the versioned API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/site", site::router())
        .nest("/admin", admin::router())
}
