//! Admin API handlers.
//!
//! These endpoints are called by the admin dashboard and require either the
//! `Arcsite-Admin-Authorization` header with the plaintext admin secret or a
//! bearer session token (see [`AdminAuth`](crate::api::extractors::AdminAuth)).
//!
//! # Endpoints
//!
//! - `POST /login`           – exchange the secret for a session token
//! - `GET  /settings`        – current merged document
//! - `PUT  /settings`        – replace the whole document
//! - `POST /settings/edits`  – apply a batch of edits and commit them
//! - `GET  /overview`        – dashboard counts and section visibility
//! - `GET  /legal/defaults`  – built-in legal documents
//! - `POST /legal/sync`      – reset the legal documents to the built-in text

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use arcsite_core::{EditorError, SettingsStore, StoreError};
use arcsite_sdk::SiteDocument;
use arcsite_sdk::objects::WriteOutcome;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

mod edits;
mod legal;
mod login;
mod overview;
mod settings;

/// Build the Admin API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login::login))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::replace_settings),
        )
        .route("/settings/edits", post(edits::apply_edits))
        .route("/overview", get(overview::overview))
        .route("/legal/defaults", get(legal::default_legal_documents))
        .route("/legal/sync", post(legal::sync_legal_documents))
}

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

/// Errors that can occur in Admin API handlers.
#[derive(Debug)]
pub(crate) enum AdminApiError {
    /// No document has been loaded yet.
    NotLoaded,
    /// The secret sent to `/login` was wrong.
    InvalidSecret,
    /// An edit in a batch was rejected; nothing was written.
    InvalidEdit { index: usize, error: EditorError },
    /// The store could not persist the document.
    Write(StoreError),
}

#[derive(Serialize)]
struct InvalidEditBody {
    index: usize,
    error: String,
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> Response {
        match self {
            AdminApiError::NotLoaded => {
                (StatusCode::SERVICE_UNAVAILABLE, "settings are still loading").into_response()
            }
            AdminApiError::InvalidSecret => {
                (StatusCode::UNAUTHORIZED, "invalid admin secret").into_response()
            }
            AdminApiError::InvalidEdit { index, error } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(InvalidEditBody {
                    index,
                    error: error.to_string(),
                }),
            )
                .into_response(),
            AdminApiError::Write(StoreError::Persistence(e)) => {
                tracing::error!(error = %e, "Admin API settings write failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(WriteOutcome {
                        persisted: false,
                        applied_locally: true,
                        error: Some(e.to_string()),
                    }),
                )
                    .into_response()
            }
            AdminApiError::Write(StoreError::Closed) => {
                (StatusCode::SERVICE_UNAVAILABLE, "settings store is shutting down")
                    .into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn current(state: &AppState) -> Result<Arc<SiteDocument>, AdminApiError> {
    state.store.snapshot().ok_or(AdminApiError::NotLoaded)
}

/// Turn a store write result into the response body.
///
/// `applied_locally` is only set when the store applied the document itself;
/// with a live remote it changes once the remote notification arrives.
pub(crate) fn write_outcome(
    store: &SettingsStore,
    result: Result<(), StoreError>,
) -> Result<Json<WriteOutcome>, AdminApiError> {
    result.map_err(AdminApiError::Write)?;
    Ok(Json(WriteOutcome {
        persisted: true,
        applied_locally: store.applies_writes_locally(),
        error: None,
    }))
}
