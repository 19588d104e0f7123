//! Persistence adapter.
//!
//! Hides the remote document store and the local cache from the settings
//! store. The adapter answers two questions: "what is the document now and
//! whenever it changes" ([`PersistenceAdapter::subscribe`]) and "replace
//! the document" ([`PersistenceAdapter::write`]).
//!
//! # Fallback order
//!
//! 1. Remote store configured and reachable: notifications come from the
//!    remote, every successful write is mirrored into the local cache.
//! 2. Remote store configured but unreachable, or its change stream fails:
//!    the local cache (or nothing) is delivered instead.
//! 3. No remote store: the local cache is delivered once, writes go to the
//!    cache only.

mod cache;
mod memory;
mod postgres;

pub use cache::{FileCache, LocalCache, MemoryCache};
pub use memory::MemoryDocumentStore;
pub use postgres::{
    CHANGE_CHANNEL, GetSiteDocument, PgDocumentStore, ReplaceSiteDocument, SETTINGS_DOCUMENT_ID,
};

use arcsite_sdk::{PartialDocument, SiteDocument};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Buffer size for notification channels.
pub const DEFAULT_CHANNEL_BUFFER: usize = 16;

/// Errors reported by the persistence layer.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No remote document store is configured.
    #[error("document store is not configured")]
    Unavailable,

    /// The remote store could not be reached.
    #[error("failed to connect to document store: {0}")]
    Connect(String),

    /// The remote store rejected or failed a write.
    #[error("remote write failed: {0}")]
    WriteFailed(String),

    /// Reading or writing the local cache failed.
    #[error("local cache error: {0}")]
    Cache(#[from] std::io::Error),

    /// The local cache holds something that is not a JSON object.
    #[error("local cache is malformed: {0}")]
    MalformedLocalCache(String),

    /// A database query failed outside of a write.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// An event on a remote change stream.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteEvent {
    /// The full stored document, or `None` if it does not exist yet.
    Snapshot(Option<Value>),
    /// The stream hit an error; it may or may not recover.
    Failed(String),
}

/// Receiving half of a remote change stream.
pub type RemoteWatch = mpsc::Receiver<RemoteEvent>;

/// A remote document store holding the single settings document.
///
/// Implementations must deliver the current document as the first event
/// of every [`watch`](DocumentStore::watch), then one event per committed
/// write from any client.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Open a change stream.
    async fn watch(&self) -> Result<RemoteWatch, PersistenceError>;

    /// Replace the stored document wholesale.
    async fn replace(&self, doc: &SiteDocument) -> Result<(), PersistenceError>;
}

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSource {
    Remote,
    LocalCache,
}

/// A document change delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The stored document; `None` when nothing is stored anywhere.
    pub document: Option<PartialDocument>,
    pub source: NotificationSource,
}

/// Receiving end of [`PersistenceAdapter::subscribe`].
///
/// Dropping the subscription (or calling
/// [`unsubscribe`](SettingsSubscription::unsubscribe)) stops the
/// forwarding task.
pub struct SettingsSubscription {
    rx: mpsc::Receiver<Notification>,
    task: Option<JoinHandle<()>>,
}

impl SettingsSubscription {
    /// Wait for the next notification. `None` once no more can arrive.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Whether a remote store feeds this subscription. `false` when only
    /// the cached document was delivered.
    pub fn is_live(&self) -> bool {
        self.task.is_some()
    }

    /// Take a notification if one is already queued.
    pub fn try_recv(&mut self) -> Option<Notification> {
        self.rx.try_recv().ok()
    }

    /// Stop receiving notifications.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SettingsSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Combines an optional remote store with a local cache.
#[derive(Clone)]
pub struct PersistenceAdapter {
    remote: Option<Arc<dyn DocumentStore>>,
    cache: Arc<dyn LocalCache>,
}

impl PersistenceAdapter {
    pub fn new(remote: Option<Arc<dyn DocumentStore>>, cache: Arc<dyn LocalCache>) -> Self {
        Self { remote, cache }
    }

    /// An adapter with no remote store.
    pub fn local_only(cache: Arc<dyn LocalCache>) -> Self {
        Self::new(None, cache)
    }

    pub fn is_remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// The remote store, or [`PersistenceError::Unavailable`].
    pub fn remote(&self) -> Result<&Arc<dyn DocumentStore>, PersistenceError> {
        self.remote.as_ref().ok_or(PersistenceError::Unavailable)
    }

    /// Read the cached document.
    ///
    /// A missing, unreadable or malformed cache is treated as absent.
    pub fn load_cached(&self) -> Option<PartialDocument> {
        match self.try_load_cached() {
            Ok(doc) => doc,
            Err(e) => {
                warn!(cache = %self.cache.describe(), error = %e, "Ignoring local settings cache");
                None
            }
        }
    }

    fn try_load_cached(&self) -> Result<Option<PartialDocument>, PersistenceError> {
        let Some(raw) = self.cache.load()? else {
            return Ok(None);
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(other) => Err(PersistenceError::MalformedLocalCache(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(PersistenceError::MalformedLocalCache(e.to_string())),
        }
    }

    fn cache_document(&self, doc: &SiteDocument) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(doc)
            .map_err(|e| PersistenceError::MalformedLocalCache(e.to_string()))?;
        self.cache.store(&json)?;
        Ok(())
    }

    fn cached_notification(&self) -> Notification {
        Notification {
            document: self.load_cached(),
            source: NotificationSource::LocalCache,
        }
    }

    /// Subscribe to document changes.
    ///
    /// Without a remote store (or when it cannot be reached) the cached
    /// document is queued before this returns and nothing else follows.
    pub async fn subscribe(&self) -> SettingsSubscription {
        let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_BUFFER);

        let remote = match self.remote() {
            Ok(remote) => remote,
            Err(e) => {
                info!(reason = %e, "Serving settings from local cache");
                let _ = tx.try_send(self.cached_notification());
                return SettingsSubscription { rx, task: None };
            }
        };

        let watch = match remote.watch().await {
            Ok(watch) => watch,
            Err(e) => {
                warn!(store = remote.name(), error = %e, "Document store unreachable, falling back to local cache");
                let _ = tx.try_send(self.cached_notification());
                return SettingsSubscription { rx, task: None };
            }
        };

        let adapter = self.clone();
        let store_name = remote.name();
        let task = tokio::spawn(async move {
            adapter.forward(store_name, watch, tx).await;
        });

        SettingsSubscription {
            rx,
            task: Some(task),
        }
    }

    async fn forward(
        &self,
        store_name: &'static str,
        mut watch: RemoteWatch,
        tx: mpsc::Sender<Notification>,
    ) {
        while let Some(event) = watch.recv().await {
            let notification = match event {
                RemoteEvent::Snapshot(value) => Notification {
                    document: value.map(into_partial),
                    source: NotificationSource::Remote,
                },
                RemoteEvent::Failed(reason) => {
                    warn!(store = store_name, %reason, "Document store stream failed, falling back to local cache");
                    self.cached_notification()
                }
            };
            if tx.send(notification).await.is_err() {
                debug!(store = store_name, "Subscriber dropped, stopping forwarder");
                return;
            }
        }
        debug!(store = store_name, "Document store stream ended");
    }

    /// Replace the stored document.
    ///
    /// With a remote store, the local cache is refreshed whether or not the
    /// remote write succeeds; a remote failure is still returned as
    /// [`PersistenceError::WriteFailed`].
    pub async fn write(&self, doc: &SiteDocument) -> Result<(), PersistenceError> {
        let Ok(remote) = self.remote() else {
            return self.cache_document(doc);
        };

        let result = remote.replace(doc).await;

        if let Err(e) = self.cache_document(doc) {
            warn!(cache = %self.cache.describe(), error = %e, "Failed to mirror settings into local cache");
        }

        result.map_err(|e| match e {
            PersistenceError::WriteFailed(_) => e,
            other => PersistenceError::WriteFailed(other.to_string()),
        })
    }
}

/// Turn a stored value into a partial document.
///
/// Anything but an object cannot be merged; it is logged and treated as an
/// empty document so the defaults show through.
fn into_partial(value: Value) -> PartialDocument {
    match value {
        Value::Object(map) => map,
        other => {
            warn!(kind = json_kind(&other), "Stored settings document is not an object, ignoring it");
            PartialDocument::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SiteDocument {
        SiteDocument::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_delivers_cache_once() {
        let cache = Arc::new(MemoryCache::with_contents(r#"{"hero":{"title":"Cached"}}"#));
        let adapter = PersistenceAdapter::local_only(cache);
        let mut sub = adapter.subscribe().await;

        let first = sub.try_recv().unwrap();
        assert_eq!(first.source, NotificationSource::LocalCache);
        assert_eq!(
            first.document.unwrap()["hero"],
            json!({ "title": "Cached" })
        );
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_empty_cache_delivers_none() {
        let adapter = PersistenceAdapter::local_only(Arc::new(MemoryCache::new()));
        let mut sub = adapter.subscribe().await;
        assert_eq!(sub.try_recv().unwrap().document, None);
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_treated_as_absent() {
        for raw in ["{not json", "[1,2,3]", "\"text\""] {
            let adapter =
                PersistenceAdapter::local_only(Arc::new(MemoryCache::with_contents(raw)));
            assert_eq!(adapter.load_cached(), None, "{raw}");
            let mut sub = adapter.subscribe().await;
            assert_eq!(sub.try_recv().unwrap().document, None);
        }
    }

    #[tokio::test]
    async fn test_unconfigured_write_goes_to_cache() {
        let cache = Arc::new(MemoryCache::new());
        let adapter = PersistenceAdapter::local_only(cache.clone());
        adapter
            .write(&doc(json!({ "contact": { "email": "a@b.c" } })))
            .await
            .unwrap();
        assert_eq!(
            adapter.load_cached().unwrap()["contact"]["email"],
            "a@b.c"
        );
    }

    #[tokio::test]
    async fn test_remote_missing_document_notifies_none() {
        let remote = Arc::new(MemoryDocumentStore::new());
        let adapter = PersistenceAdapter::new(Some(remote), Arc::new(MemoryCache::new()));
        let mut sub = adapter.subscribe().await;
        assert!(sub.is_live());
        let first = sub.recv().await.unwrap();
        assert_eq!(first.source, NotificationSource::Remote);
        assert_eq!(first.document, None);
    }

    #[tokio::test]
    async fn test_remote_write_notifies_and_mirrors() {
        let remote = Arc::new(MemoryDocumentStore::new());
        let cache = Arc::new(MemoryCache::new());
        let adapter = PersistenceAdapter::new(Some(remote.clone()), cache);
        let mut sub = adapter.subscribe().await;
        assert_eq!(sub.recv().await.unwrap().document, None);

        let written = doc(json!({ "hero": { "title": "Remote" } }));
        adapter.write(&written).await.unwrap();

        let next = sub.recv().await.unwrap();
        assert_eq!(next.document, Some(written.clone().into_map()));
        assert_eq!(adapter.load_cached(), Some(written.into_map()));
    }

    #[tokio::test]
    async fn test_other_clients_writes_are_observed() {
        let remote = Arc::new(MemoryDocumentStore::new());
        let ours = PersistenceAdapter::new(Some(remote.clone()), Arc::new(MemoryCache::new()));
        let theirs = PersistenceAdapter::new(Some(remote.clone()), Arc::new(MemoryCache::new()));
        let mut sub = ours.subscribe().await;
        let _ = sub.recv().await;

        theirs
            .write(&doc(json!({ "about": { "title": "Theirs" } })))
            .await
            .unwrap();
        let next = sub.recv().await.unwrap();
        assert_eq!(next.document.unwrap()["about"]["title"], "Theirs");
    }

    #[tokio::test]
    async fn test_remote_failure_still_caches_and_errors() {
        let remote = Arc::new(MemoryDocumentStore::new());
        remote.set_fail_writes(true);
        let adapter = PersistenceAdapter::new(Some(remote.clone()), Arc::new(MemoryCache::new()));

        let written = doc(json!({ "footer": { "quote": "Q" } }));
        let err = adapter.write(&written).await.unwrap_err();
        assert!(matches!(err, PersistenceError::WriteFailed(_)));
        assert_eq!(adapter.load_cached(), Some(written.into_map()));
        assert_eq!(remote.document(), None);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_to_cache() {
        let remote = Arc::new(MemoryDocumentStore::new());
        remote.set_unreachable(true);
        let cache = Arc::new(MemoryCache::with_contents(r#"{"showGallery":false}"#));
        let adapter = PersistenceAdapter::new(Some(remote), cache);

        let mut sub = adapter.subscribe().await;
        let first = sub.try_recv().unwrap();
        assert_eq!(first.source, NotificationSource::LocalCache);
        assert_eq!(first.document.unwrap()["showGallery"], false);
        assert!(!sub.is_live());
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stream_failure_delivers_cache() {
        let remote = Arc::new(MemoryDocumentStore::with_document(json!({ "hero": {} })));
        let cache = Arc::new(MemoryCache::with_contents(r#"{"hero":{"title":"Cached"}}"#));
        let adapter = PersistenceAdapter::new(Some(remote.clone()), cache);
        let mut sub = adapter.subscribe().await;
        assert_eq!(sub.recv().await.unwrap().source, NotificationSource::Remote);

        remote.fail_streams("connection reset");
        let fallback = sub.recv().await.unwrap();
        assert_eq!(fallback.source, NotificationSource::LocalCache);
        assert_eq!(fallback.document.unwrap()["hero"]["title"], "Cached");
    }

    #[tokio::test]
    async fn test_non_object_remote_document_is_treated_as_empty() {
        let remote = Arc::new(MemoryDocumentStore::with_document(json!(["bogus"])));
        let adapter = PersistenceAdapter::new(Some(remote), Arc::new(MemoryCache::new()));
        let mut sub = adapter.subscribe().await;
        assert_eq!(
            sub.recv().await.unwrap().document,
            Some(PartialDocument::new())
        );
    }
}
