use axum::{Json, extract::State, response::IntoResponse};

use crate::api::extractors::AdminAuth;
use crate::state::AppState;

use super::{AdminApiError, current};

/// `GET /overview`: dashboard counts and section visibility.
pub async fn overview(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, AdminApiError> {
    let doc = current(&state)?;
    Ok(Json(arcsite_core::editor::overview(&doc)))
}
