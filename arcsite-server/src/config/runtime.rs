//! Runtime configuration types.
//!
//! Server and admin settings come from `arcsite-sdk::config`; the store
//! settings are server-only.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arcsite_core::StoreOptions;
pub use arcsite_sdk::config::{AdminConfig, ServerConfig};
use tokio::sync::RwLock;

pub use super::file::StoreBackend;

/// Validated document store settings.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub cache_path: PathBuf,
    pub min_loading: Duration,
}

impl StoreSettings {
    pub fn options(&self) -> StoreOptions {
        StoreOptions {
            min_loading: self.min_loading,
        }
    }
}

/// Config sections that can be swapped on SIGHUP.
#[derive(Clone)]
pub struct SharedConfig {
    pub server: Arc<RwLock<ServerConfig>>,
    pub admin: Arc<RwLock<AdminConfig>>,
}
