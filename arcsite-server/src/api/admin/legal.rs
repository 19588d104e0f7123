use axum::{Json, extract::State, response::IntoResponse};
use arcsite_core::defaults;

use crate::api::extractors::AdminAuth;
use crate::state::AppState;

use super::{AdminApiError, write_outcome};

/// `GET /legal/defaults`: the built-in privacy policy and terms.
pub async fn default_legal_documents(_auth: AdminAuth) -> impl IntoResponse {
    Json(defaults::default_legal_documents())
}

/// `POST /legal/sync`: reset both legal documents to the built-in text.
pub async fn sync_legal_documents(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, AdminApiError> {
    write_outcome(&state.store, state.store.sync_legal_documents().await)
}
