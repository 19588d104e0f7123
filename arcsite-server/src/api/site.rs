//! Public site API handlers.
//!
//! Read-only views of the canonical document for display collaborators.
//! No authentication.
//!
//! # Endpoints
//!
//! - `GET /settings` – full merged document
//! - `GET /sections` – visible sections in page order
//! - `GET /contact`  – contact links

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::{IntoResponse, Response},
    routing::get,
};
use arcsite_core::display::{contact_links, preferred_email_link, visible_sections};
use arcsite_sdk::SiteDocument;
use arcsite_sdk::objects::SectionsResponse;
use std::sync::Arc;

use crate::state::AppState;

/// Build the site API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings))
        .route("/sections", get(get_sections))
        .route("/contact", get(get_contact))
}

/// Errors that can occur in site API handlers.
#[derive(Debug)]
pub(crate) enum SiteApiError {
    /// No document has been loaded yet.
    NotLoaded,
}

impl IntoResponse for SiteApiError {
    fn into_response(self) -> Response {
        match self {
            SiteApiError::NotLoaded => {
                (StatusCode::SERVICE_UNAVAILABLE, "settings are still loading").into_response()
            }
        }
    }
}

fn current(state: &AppState) -> Result<Arc<SiteDocument>, SiteApiError> {
    state.store.snapshot().ok_or(SiteApiError::NotLoaded)
}

/// `GET /settings`: the full merged document.
async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, SiteApiError> {
    let doc = current(&state)?;
    Ok(Json(SiteDocument::clone(&doc)))
}

/// `GET /sections`: sections to render, in order.
async fn get_sections(State(state): State<AppState>) -> Result<impl IntoResponse, SiteApiError> {
    let doc = current(&state)?;
    Ok(Json(SectionsResponse {
        sections: visible_sections(&doc),
    }))
}

/// `GET /contact`: email, phone and WhatsApp links.
///
/// `preferred_email` is chosen from the `User-Agent`.
async fn get_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, SiteApiError> {
    let doc = current(&state)?;
    let mut links = contact_links(&doc);
    if let Some(user_agent) = headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
        links.preferred_email = preferred_email_link(&links, user_agent);
    }
    Ok(Json(links))
}
