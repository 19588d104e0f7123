#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod defaults;
pub mod display;
pub mod editor;
pub mod framework;
pub mod merge;
pub mod persistence;
pub mod store;

pub use editor::{ContentEditor, EditorError};
pub use persistence::{PersistenceAdapter, PersistenceError};
pub use store::{SettingsState, SettingsStore, SettingsWatcher, StoreError, StoreOptions};
