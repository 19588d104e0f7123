//! Configuration module for arcsite-server.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables. Also handles admin secret hashing.

pub mod file;
pub mod runtime;

use crate::config::file::{FileConfig, StoreBackend};
use crate::config::runtime::{AdminConfig, ServerConfig, SharedConfig, StoreSettings};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("password hashing error: {0}")]
    HashError(String),

    #[error("postgres backend needs store.database_url or DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub store: StoreSettings,
}

impl LoadedConfig {
    /// Split off the reloadable sections.
    pub fn shared(&self) -> SharedConfig {
        SharedConfig {
            server: Arc::new(RwLock::new(self.server.clone())),
            admin: Arc::new(RwLock::new(self.admin.clone())),
        }
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Hash the admin secret if it's plaintext (and rewrite the file)
    /// 5. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        let database_url = file_config
            .store
            .database_url
            .clone()
            .or_else(get_database_url);

        self.validate(&file_config, database_url.as_deref())?;

        // Hash admin secret if needed and rewrite config. The rewrite happens
        // before CLI overrides so they never end up in the file.
        let secret_hash = if file_config.is_admin_secret_hashed() {
            file_config.admin.secret.clone()
        } else {
            let hash = self.hash_secret(&file_config.admin.secret)?;
            file_config.admin.secret = hash.clone();
            self.rewrite_config(&file_config)?;
            tracing::info!("Admin secret hashed and config file updated");
            hash
        };

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        Ok(self.build_loaded_config(file_config, secret_hash, database_url))
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn validate(&self, config: &FileConfig, database_url: Option<&str>) -> Result<(), ConfigError> {
        if config.admin.secret.is_empty() {
            return Err(ConfigError::ValidationError(
                "admin.secret must not be empty".to_string(),
            ));
        }
        if config.store.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "store.max_connections must be at least 1".to_string(),
            ));
        }
        if config.store.backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }

    fn hash_secret(&self, plaintext: &str) -> Result<String, ConfigError> {
        use argon2::{
            Argon2, PasswordHasher,
            password_hash::{SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ConfigError::HashError(e.to_string()))
    }

    fn rewrite_config(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(config)?;

        // Write atomically: write to temp file, then rename
        let temp_path = self.config_path.with_extension("toml.tmp");
        std::fs::write(&temp_path, toml_string)?;
        std::fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }

    fn build_loaded_config(
        &self,
        file_config: FileConfig,
        secret_hash: String,
        database_url: Option<String>,
    ) -> LoadedConfig {
        LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            admin: AdminConfig::new(secret_hash),
            store: StoreSettings {
                backend: file_config.store.backend,
                database_url,
                max_connections: file_config.store.max_connections,
                cache_path: file_config.store.cache_path,
                min_loading: Duration::from_millis(file_config.store.min_loading_ms),
            },
        }
    }
}

/// Get the database URL from the environment.
pub fn get_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("arcsite-config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_plaintext_secret_is_hashed_and_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[admin]\nsecret = \"letmein\"\n\n[store]\nbackend = \"memory\"\nmin_loading_ms = 10\n",
        );

        let loaded = ConfigLoader::new(&path, None).load().unwrap();
        assert!(loaded.admin.verify_secret("letmein"));
        assert_eq!(loaded.store.backend, StoreBackend::Memory);
        assert_eq!(loaded.store.min_loading, Duration::from_millis(10));

        let rewritten: FileConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(rewritten.is_admin_secret_hashed());
        assert_eq!(rewritten.store.backend, StoreBackend::Memory);

        // Loading again keeps the same hash.
        let reloaded = ConfigLoader::new(&path, None).reload().unwrap();
        assert_eq!(reloaded.admin.secret_hash, loaded.admin.secret_hash);
    }

    #[test]
    fn test_listen_override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[admin]\nsecret = \"s\"\n");
        let listen: SocketAddr = "127.0.0.1:9999".parse().unwrap();

        let loaded = ConfigLoader::new(&path, Some(listen)).load().unwrap();
        assert_eq!(loaded.server.listen, listen);

        let rewritten: FileConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten.server.listen.port(), 8080);
    }

    #[test]
    fn test_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[admin]\nsecret = \"\"\n");
        assert!(matches!(
            ConfigLoader::new(&path, None).load(),
            Err(ConfigError::ValidationError(_))
        ));

        let path = write_config(
            &dir,
            "[admin]\nsecret = \"s\"\n[store]\nmax_connections = 0\n",
        );
        assert!(matches!(
            ConfigLoader::new(&path, None).load(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ConfigLoader::new("/nonexistent/arcsite-config.toml", None).load(),
            Err(ConfigError::IoError(_))
        ));
    }
}
