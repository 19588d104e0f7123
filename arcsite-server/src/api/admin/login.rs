use axum::{Json, extract::State, response::IntoResponse};
use arcsite_sdk::objects::{LoginRequest, LoginResponse};
use arcsite_sdk::signature::SessionToken;

use crate::state::AppState;

use super::AdminApiError;

/// `POST /login`: exchange the admin secret for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let admin = state.config.admin.read().await;
    if !admin.verify_secret(&request.secret) {
        tracing::warn!("Admin login with wrong secret");
        return Err(AdminApiError::InvalidSecret);
    }
    let token = SessionToken::issue(&admin.session_key());
    drop(admin);

    tracing::info!(expires_at = token.expires_at, "Admin session issued");
    Ok(Json(LoginResponse {
        token: token.to_header(),
        expires_at: token.expires_at,
    }))
}
