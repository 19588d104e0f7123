//! Custom Axum extractors for request authentication.
//!
//! `AdminAuth` accepts either:
//! - the plaintext admin secret in the `Arcsite-Admin-Authorization` header,
//!   verified against the argon2 hash from the config, or
//! - `Authorization: Bearer {expires_at}.{signature}`, a session token issued
//!   by `POST /admin/login`.
//!
//! Token cryptography is delegated to [`arcsite_sdk::signature`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use arcsite_sdk::signature::{ADMIN_AUTH_HEADER, SessionToken, SignatureError};

use crate::state::AppState;

/// Proof that the request carries valid admin credentials.
pub struct AdminAuth;

/// Errors returned by the [`AdminAuth`] extractor.
#[derive(Debug)]
pub enum AdminAuthError {
    MissingCredentials,
    InvalidHeader,
    InvalidSecret,
    InvalidToken,
    SessionExpired,
}

impl From<SignatureError> for AdminAuthError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidFormat | SignatureError::InvalidBase64 => Self::InvalidHeader,
            SignatureError::SignatureMismatch => Self::InvalidToken,
            SignatureError::Expired => Self::SessionExpired,
        }
    }
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AdminAuthError::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "missing admin credentials")
            }
            AdminAuthError::InvalidHeader => {
                (StatusCode::BAD_REQUEST, "invalid authorization header format")
            }
            AdminAuthError::InvalidSecret => (StatusCode::UNAUTHORIZED, "invalid admin secret"),
            AdminAuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid session token"),
            AdminAuthError::SessionExpired => (StatusCode::UNAUTHORIZED, "session expired"),
        };
        (status, message).into_response()
    }
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AdminAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(secret) = parts.headers.get(ADMIN_AUTH_HEADER) {
            let secret = secret.to_str().map_err(|_| AdminAuthError::InvalidHeader)?;
            let admin = state.config.admin.read().await;
            if !admin.verify_secret(secret) {
                tracing::warn!("Admin request with wrong secret");
                return Err(AdminAuthError::InvalidSecret);
            }
            return Ok(AdminAuth);
        }

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AdminAuthError::MissingCredentials)?
            .to_str()
            .map_err(|_| AdminAuthError::InvalidHeader)?
            .strip_prefix("Bearer ")
            .ok_or(AdminAuthError::InvalidHeader)?;

        let token = SessionToken::parse(bearer.trim())?;
        let key = state.config.admin.read().await.session_key();
        token.verify(&key)?;
        Ok(AdminAuth)
    }
}
