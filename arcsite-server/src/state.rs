//! Application state shared across all request handlers.

use crate::config::runtime::SharedConfig;
use arcsite_core::SettingsStore;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// The canonical site document.
    pub store: SettingsStore,
    /// Runtime configuration (admin section can be reloaded via SIGHUP).
    pub config: SharedConfig,
}

impl AppState {
    pub fn new(store: SettingsStore, config: SharedConfig) -> Self {
        Self { store, config }
    }
}
