use axum::{Json, extract::State, response::IntoResponse};
use arcsite_sdk::SiteDocument;

use crate::api::extractors::AdminAuth;
use crate::state::AppState;

use super::{AdminApiError, current, write_outcome};

/// `GET /settings`: the current merged document.
pub async fn get_settings(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, AdminApiError> {
    let doc = current(&state)?;
    Ok(Json(SiteDocument::clone(&doc)))
}

/// `PUT /settings`: replace the whole document.
pub async fn replace_settings(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(doc): Json<SiteDocument>,
) -> Result<impl IntoResponse, AdminApiError> {
    write_outcome(&state.store, state.store.update_settings(&doc).await)
}
