//! Admin authentication headers and session tokens.
//!
//! The admin API accepts either the plaintext admin secret in the
//! `Arcsite-Admin-Authorization` header, or a short-lived session token
//! obtained from the login endpoint and sent as a bearer token.
//!
//! Session token wire format:
//!
//! ```text
//! Authorization: Bearer {expires_at}.{base64_signature}
//! ```
//!
//! where the signature is `HMAC-SHA256("session.{expires_at}", key)`.

/// Header name for admin API authentication (plaintext secret).
pub const ADMIN_AUTH_HEADER: &str = "Arcsite-Admin-Authorization";

/// Lifetime of a session token (in seconds).
pub const SESSION_TTL: i64 = 12 * 60 * 60;

/// Errors produced by session token operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid token format")]
    InvalidFormat,
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("invalid signature")]
    SignatureMismatch,
    #[error("session expired")]
    Expired,
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

/// A signed, expiring admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub expires_at: i64,
    pub signature: Box<[u8]>,
}

impl SessionToken {
    /// Issue a token valid for [`SESSION_TTL`] seconds from now.
    pub fn issue(key: &[u8]) -> Self {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        Self::issue_at(now + SESSION_TTL, key)
    }

    /// Issue a token expiring at the given unix timestamp.
    pub fn issue_at(expires_at: i64, key: &[u8]) -> Self {
        let signature = ring::hmac::sign(
            &ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key),
            signing_input(expires_at).as_bytes(),
        );
        Self {
            expires_at,
            signature: signature.as_ref().to_owned().into_boxed_slice(),
        }
    }

    /// Parse a `{expires_at}.{base64}` token without verifying it.
    pub fn parse(value: &str) -> Result<Self, SignatureError> {
        let (expires_at, signature) = value
            .split_once('.')
            .ok_or(SignatureError::InvalidFormat)?;
        let expires_at: i64 = expires_at
            .parse()
            .map_err(|_| SignatureError::InvalidFormat)?;
        let signature = fast32::base64::RFC4648_NOPAD
            .decode_str(signature)
            .map_err(|_| SignatureError::InvalidBase64)?
            .into_boxed_slice();
        Ok(Self {
            expires_at,
            signature,
        })
    }

    /// Verify the HMAC and that the token has not expired.
    pub fn verify(&self, key: &[u8]) -> Result<(), SignatureError> {
        ring::hmac::verify(
            &ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key),
            signing_input(self.expires_at).as_bytes(),
            &self.signature,
        )?;
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        if now >= self.expires_at {
            return Err(SignatureError::Expired);
        }
        Ok(())
    }

    /// Format the token for the `Authorization: Bearer` header.
    pub fn to_header(&self) -> String {
        format!(
            "{}.{}",
            self.expires_at,
            fast32::base64::RFC4648_NOPAD.encode(&self.signature)
        )
    }
}

fn signing_input(expires_at: i64) -> String {
    format!("session.{expires_at}")
}
