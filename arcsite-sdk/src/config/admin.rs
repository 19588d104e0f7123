//! Admin configuration.

use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// Admin configuration with hashed secret.
///
/// There is a single shared admin credential; anyone holding it can edit
/// the site.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// The argon2 hashed admin secret.
    pub secret_hash: String,
}

impl AdminConfig {
    /// Create a new AdminConfig with the given hashed secret.
    pub fn new(secret_hash: String) -> Self {
        Self { secret_hash }
    }

    /// Verify a plaintext password against the stored hash.
    ///
    /// Returns `true` if the password matches, `false` otherwise.
    pub fn verify_secret(&self, plaintext: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.secret_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Key used to sign session tokens.
    ///
    /// Derived from the stored hash, so rotating the secret invalidates
    /// every outstanding session.
    pub fn session_key(&self) -> [u8; 32] {
        let digest = ring::digest::digest(&ring::digest::SHA256, self.secret_hash.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(digest.as_ref());
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{
        Argon2, PasswordHasher,
        password_hash::{SaltString, rand_core::OsRng},
    };

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_secret() {
        let admin_config = AdminConfig::new(hash("test-password"));

        assert!(admin_config.verify_secret("test-password"));
        assert!(!admin_config.verify_secret("wrong-password"));
    }

    #[test]
    fn test_unparseable_hash_never_verifies() {
        let admin_config = AdminConfig::new("plaintext".to_string());
        assert!(!admin_config.verify_secret("plaintext"));
    }

    #[test]
    fn test_session_key_follows_secret() {
        let a = AdminConfig::new(hash("one"));
        let b = AdminConfig::new(hash("two"));
        assert_eq!(a.session_key(), a.clone().session_key());
        assert_ne!(a.session_key(), b.session_key());
    }
}
