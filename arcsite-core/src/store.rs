//! The settings store.
//!
//! Owns the canonical, fully merged site document. The store subscribes to
//! the persistence adapter once, merges every notification onto the
//! defaults and swaps the result into a `watch` slot, so readers always see
//! a complete document and never a half-applied merge.
//!
//! Consumers either poll [`SettingsStore::snapshot`] / [`SettingsStore::state`]
//! or hold a [`SettingsWatcher`] and await changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use arcsite_sdk::{PartialDocument, Section, SiteDocument};
use thiserror::Error;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::defaults::{default_legal_documents, defaults};
use crate::merge::merge;
use crate::persistence::{
    Notification, PersistenceAdapter, PersistenceError, SettingsSubscription,
};

/// Minimum time spent in [`SettingsState::Loading`] by default.
pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(2000);

/// Errors returned by the settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("settings store has been shut down")]
    Closed,
}

/// What readers of the store can observe.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsState {
    /// Startup window. Holds the latest document if one already arrived.
    Loading(Option<Arc<SiteDocument>>),
    /// A document is available and the loading window has elapsed.
    Ready(Arc<SiteDocument>),
}

impl SettingsState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SettingsState::Ready(_))
    }

    /// The latest document, in either state.
    pub fn document(&self) -> Option<&Arc<SiteDocument>> {
        match self {
            SettingsState::Loading(doc) => doc.as_ref(),
            SettingsState::Ready(doc) => Some(doc),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// `Ready` is not reported before this much time has passed since
    /// [`SettingsStore::start`], even if a document arrived earlier.
    pub min_loading: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            min_loading: DEFAULT_MIN_LOADING,
        }
    }
}

/// Canonical slot shared by the store handle and its notification task.
struct StateSlot {
    tx: watch::Sender<SettingsState>,
    loading_deadline: Instant,
}

impl StateSlot {
    fn apply(&self, partial: Option<&PartialDocument>) {
        let empty = PartialDocument::new();
        let doc = Arc::new(merge(defaults(), partial.unwrap_or(&empty)));
        let past_deadline = Instant::now() >= self.loading_deadline;

        self.tx.send_modify(|state| {
            *state = match state {
                SettingsState::Loading(_) if !past_deadline => SettingsState::Loading(Some(doc)),
                _ => SettingsState::Ready(doc),
            };
        });
    }

    fn apply_notification(&self, notification: Notification) {
        debug!(
            source = ?notification.source,
            stored = notification.document.is_some(),
            "Applying settings notification"
        );
        self.apply(notification.document.as_ref());
    }

    /// Promote `Loading(Some)` to `Ready` once the loading window is over.
    fn promote(&self) {
        let promoted = self.tx.send_if_modified(|state| match state {
            SettingsState::Loading(Some(doc)) => {
                *state = SettingsState::Ready(Arc::clone(doc));
                true
            }
            _ => false,
        });
        if promoted {
            info!("Settings ready");
        }
    }

    fn promote_if_due(&self) {
        if Instant::now() >= self.loading_deadline {
            self.promote();
        }
    }
}

struct StoreInner {
    adapter: PersistenceAdapter,
    slot: Arc<StateSlot>,
    task: Mutex<Option<JoinHandle<()>>>,
    /// A remote store feeds the notification loop.
    remote_live: bool,
    closed: AtomicBool,
    on_close: Notify,
}

impl StoreInner {
    fn stop(&self) {
        if let Some(task) = self
            .task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Shared handle to the canonical site document.
///
/// Cheap to clone; every clone observes the same document.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<StoreInner>,
}

impl SettingsStore {
    /// Subscribe to the adapter and start applying notifications.
    ///
    /// Notifications the adapter already has queued (the local cache when
    /// no remote store is configured) are applied before this returns.
    pub async fn start(adapter: PersistenceAdapter, options: StoreOptions) -> Self {
        let (tx, _) = watch::channel(SettingsState::Loading(None));
        let slot = Arc::new(StateSlot {
            tx,
            loading_deadline: Instant::now() + options.min_loading,
        });

        let mut subscription = adapter.subscribe().await;
        while let Some(notification) = subscription.try_recv() {
            slot.apply_notification(notification);
        }
        slot.promote_if_due();

        let remote_live = subscription.is_live();
        let task = tokio::spawn(run(Arc::clone(&slot), subscription));

        info!(
            remote = adapter.is_remote_configured(),
            remote_live,
            min_loading_ms = options.min_loading.as_millis() as u64,
            "Settings store started"
        );

        Self {
            inner: Arc::new(StoreInner {
                adapter,
                slot,
                task: Mutex::new(Some(task)),
                remote_live,
                closed: AtomicBool::new(false),
                on_close: Notify::new(),
            }),
        }
    }

    /// The current state.
    pub fn state(&self) -> SettingsState {
        self.inner.slot.tx.borrow().clone()
    }

    /// The latest merged document. `None` only before the first
    /// notification arrived.
    pub fn snapshot(&self) -> Option<Arc<SiteDocument>> {
        self.inner.slot.tx.borrow().document().cloned()
    }

    pub fn is_remote_configured(&self) -> bool {
        self.inner.adapter.is_remote_configured()
    }

    /// Whether successful writes are applied by the store itself rather
    /// than by a remote notification. True without a remote store and when
    /// the remote could not be subscribed to at start.
    pub fn applies_writes_locally(&self) -> bool {
        !self.inner.remote_live
    }

    /// Watch for state changes.
    pub fn subscribe(&self) -> SettingsWatcher {
        SettingsWatcher {
            rx: self.inner.slot.tx.subscribe(),
        }
    }

    /// Wait until the store is `Ready` and return the document.
    ///
    /// Returns [`StoreError::Closed`] if the store shuts down first.
    pub async fn wait_ready(&self) -> Result<Arc<SiteDocument>, StoreError> {
        let closed = self.inner.on_close.notified();
        tokio::pin!(closed);
        closed.as_mut().enable();

        let mut rx = self.inner.slot.tx.subscribe();
        if self.inner.closed.load(Ordering::SeqCst) && !rx.borrow().is_ready() {
            return Err(StoreError::Closed);
        }

        tokio::select! {
            biased;
            state = rx.wait_for(SettingsState::is_ready) => {
                let state = state.map_err(|_| StoreError::Closed)?;
                state.document().cloned().ok_or(StoreError::Closed)
            }
            _ = &mut closed => Err(StoreError::Closed),
        }
    }

    /// Replace the whole document.
    ///
    /// With a live remote subscription, the canonical document changes when
    /// the remote's notification arrives. Otherwise it changes before this
    /// returns. When the write fails the document is applied locally anyway
    /// and the error is returned.
    pub async fn update_settings(&self, doc: &SiteDocument) -> Result<(), StoreError> {
        if self.inner.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }

        match self.inner.adapter.write(doc).await {
            Ok(()) => {
                if !self.inner.remote_live {
                    self.inner.slot.apply(Some(doc.as_map()));
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Settings write failed, applying locally");
                self.inner.slot.apply(Some(doc.as_map()));
                Err(e.into())
            }
        }
    }

    /// Reset both legal documents to the built-in text and persist.
    pub async fn sync_legal_documents(&self) -> Result<(), StoreError> {
        let mut doc = match self.snapshot() {
            Some(current) => SiteDocument::clone(&current),
            None => defaults().clone(),
        };
        let legal = default_legal_documents();
        let map = doc.as_map_mut();
        map.insert(Section::PrivacyPolicy.key().to_owned(), legal.privacy_policy);
        map.insert(Section::TermsOfService.key().to_owned(), legal.terms_of_service);

        info!("Syncing legal documents to defaults");
        self.update_settings(&doc).await
    }

    /// Stop applying notifications. Later writes return
    /// [`StoreError::Closed`]; the last document stays readable.
    pub fn shutdown(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner.stop();
        self.inner.on_close.notify_waiters();
        info!("Settings store shut down");
    }
}

async fn run(slot: Arc<StateSlot>, mut subscription: SettingsSubscription) {
    let mut deadline_passed = Instant::now() >= slot.loading_deadline;
    let mut stream_open = true;

    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(slot.loading_deadline), if !deadline_passed => {
                deadline_passed = true;
                slot.promote();
            }
            notification = subscription.recv(), if stream_open => match notification {
                Some(notification) => slot.apply_notification(notification),
                None => {
                    debug!("Settings subscription closed");
                    stream_open = false;
                }
            },
            else => break,
        }
    }
}

/// Receives settings state changes.
pub struct SettingsWatcher {
    rx: watch::Receiver<SettingsState>,
}

impl SettingsWatcher {
    /// Wait for the next state change.
    pub async fn changed(&mut self) -> Result<(), StoreError> {
        self.rx.changed().await.map_err(|_| StoreError::Closed)
    }

    /// The state as of the last [`changed`](Self::changed).
    pub fn current(&mut self) -> SettingsState {
        self.rx.borrow_and_update().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryCache, MemoryDocumentStore};
    use serde_json::{Value, json};

    fn doc(value: Value) -> SiteDocument {
        SiteDocument::from_value(value).unwrap()
    }

    fn immediate() -> StoreOptions {
        StoreOptions {
            min_loading: Duration::ZERO,
        }
    }

    fn local(cache: MemoryCache) -> PersistenceAdapter {
        PersistenceAdapter::local_only(Arc::new(cache))
    }

    fn remote(store: Arc<MemoryDocumentStore>) -> PersistenceAdapter {
        PersistenceAdapter::new(Some(store), Arc::new(MemoryCache::new()))
    }

    #[tokio::test]
    async fn test_no_store_and_empty_cache_yields_defaults() {
        let store = SettingsStore::start(local(MemoryCache::new()), immediate()).await;
        let ready = store.wait_ready().await.unwrap();
        assert_eq!(&*ready, defaults());
        assert_eq!(store.snapshot().as_deref(), Some(defaults()));
    }

    #[tokio::test]
    async fn test_cached_document_is_merged_at_start() {
        let cache = MemoryCache::with_contents(r#"{"hero":{"title":"Cached"},"showVision":false}"#);
        let store = SettingsStore::start(local(cache), immediate()).await;
        let snap = store.snapshot().unwrap();
        assert_eq!(snap.text(Section::Hero, "title"), Some("Cached"));
        assert_eq!(
            snap.text(Section::Hero, "tagline"),
            defaults().text(Section::Hero, "tagline")
        );
        assert!(!snap.is_visible(Section::Vision));
    }

    #[tokio::test]
    async fn test_local_echo_without_remote() {
        let store = SettingsStore::start(local(MemoryCache::new()), immediate()).await;
        let written = doc(json!({ "contact": { "email": "new@studio.in" } }));

        store.update_settings(&written).await.unwrap();

        let snap = store.snapshot().unwrap();
        assert_eq!(snap.text(Section::Contact, "email"), Some("new@studio.in"));
        assert_eq!(*snap, merge(defaults(), written.as_map()));
    }

    #[tokio::test]
    async fn test_local_writes_survive_restart() {
        let cache = Arc::new(MemoryCache::new());
        let adapter = PersistenceAdapter::local_only(cache.clone());
        let store = SettingsStore::start(adapter.clone(), immediate()).await;
        store
            .update_settings(&doc(json!({ "footer": { "quote": "Q" } })))
            .await
            .unwrap();
        store.shutdown();

        let restarted = SettingsStore::start(adapter, immediate()).await;
        assert_eq!(
            restarted.snapshot().unwrap().text(Section::Footer, "quote"),
            Some("Q")
        );
    }

    #[tokio::test]
    async fn test_write_failure_still_applies_optimistically() {
        let backend = Arc::new(MemoryDocumentStore::new());
        backend.set_fail_writes(true);
        let store = SettingsStore::start(remote(backend), immediate()).await;
        store.wait_ready().await.unwrap();

        let written = doc(json!({ "hero": { "title": "Optimistic" } }));
        let err = store.update_settings(&written).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Persistence(PersistenceError::WriteFailed(_))
        ));
        assert_eq!(*store.snapshot().unwrap(), merge(defaults(), written.as_map()));
    }

    #[tokio::test]
    async fn test_remote_partial_document_keeps_sibling_defaults() {
        let backend = Arc::new(MemoryDocumentStore::with_document(json!({
            "contact": { "email": "x@y.com" }
        })));
        let store = SettingsStore::start(remote(backend), immediate()).await;
        let snap = store.wait_ready().await.unwrap();
        assert_eq!(snap.text(Section::Contact, "email"), Some("x@y.com"));
        assert_eq!(
            snap.text(Section::Contact, "phone"),
            defaults().text(Section::Contact, "phone")
        );
    }

    #[tokio::test]
    async fn test_remote_write_arrives_through_notification() {
        let backend = Arc::new(MemoryDocumentStore::new());
        let store = SettingsStore::start(remote(backend.clone()), immediate()).await;
        store.wait_ready().await.unwrap();
        let mut watcher = store.subscribe();

        store
            .update_settings(&doc(json!({ "about": { "title": "Remote" } })))
            .await
            .unwrap();

        watcher.changed().await.unwrap();
        let state = watcher.current();
        assert_eq!(
            state.document().unwrap().text(Section::About, "title"),
            Some("Remote")
        );
        assert!(backend.document().is_some());
    }

    #[tokio::test]
    async fn test_external_writes_update_every_store() {
        let backend = Arc::new(MemoryDocumentStore::new());
        let ours = SettingsStore::start(remote(backend.clone()), immediate()).await;
        let theirs = SettingsStore::start(remote(backend), immediate()).await;
        ours.wait_ready().await.unwrap();
        let mut watcher = ours.subscribe();

        theirs
            .update_settings(&doc(json!({ "showGallery": false })))
            .await
            .unwrap();
        watcher.changed().await.unwrap();
        assert!(!ours.snapshot().unwrap().is_visible(Section::Gallery));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_waits_for_minimum_loading_time() {
        let store = SettingsStore::start(
            local(MemoryCache::new()),
            StoreOptions {
                min_loading: Duration::from_millis(2000),
            },
        )
        .await;

        // Document is already there, but the loading window is not over.
        assert!(matches!(store.state(), SettingsState::Loading(Some(_))));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!store.state().is_ready());

        let ready = store.wait_ready().await.unwrap();
        assert_eq!(&*ready, defaults());
        assert!(store.state().is_ready());
    }

    #[tokio::test]
    async fn test_unreachable_remote_starts_from_cache() {
        let backend = Arc::new(MemoryDocumentStore::new());
        backend.set_unreachable(true);
        let adapter = PersistenceAdapter::new(
            Some(backend),
            Arc::new(MemoryCache::with_contents(r#"{"hero":{"title":"Offline"}}"#)),
        );
        let store = SettingsStore::start(adapter, immediate()).await;
        assert_eq!(
            store.snapshot().unwrap().text(Section::Hero, "title"),
            Some("Offline")
        );
        assert!(store.state().is_ready());
    }

    #[tokio::test]
    async fn test_writes_apply_locally_when_remote_was_unreachable_at_start() {
        let backend = Arc::new(MemoryDocumentStore::new());
        backend.set_unreachable(true);
        let store = SettingsStore::start(remote(backend.clone()), immediate()).await;
        assert!(store.is_remote_configured());
        assert!(store.applies_writes_locally());

        store
            .update_settings(&doc(json!({ "hero": { "title": "Saved" } })))
            .await
            .unwrap();

        assert_eq!(
            backend.document().unwrap()["hero"]["title"],
            json!("Saved")
        );
        assert_eq!(
            store.snapshot().unwrap().text(Section::Hero, "title"),
            Some("Saved")
        );
    }

    #[tokio::test]
    async fn test_live_remote_does_not_apply_writes_locally() {
        let store =
            SettingsStore::start(remote(Arc::new(MemoryDocumentStore::new())), immediate()).await;
        assert!(!store.applies_writes_locally());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_ready_returns_closed_after_shutdown() {
        let store = SettingsStore::start(
            local(MemoryCache::new()),
            StoreOptions {
                min_loading: Duration::from_secs(60),
            },
        )
        .await;
        assert!(!store.state().is_ready());

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move { store.wait_ready().await })
        };
        tokio::task::yield_now().await;
        store.shutdown();

        assert!(matches!(waiter.await.unwrap(), Err(StoreError::Closed)));
        assert!(matches!(store.wait_ready().await, Err(StoreError::Closed)));
    }

    #[tokio::test]
    async fn test_sync_legal_documents_restores_defaults() {
        let cache = MemoryCache::with_contents(
            r#"{"privacyPolicy":{"title":"Old","sections":[]},"hero":{"title":"Kept"}}"#,
        );
        let store = SettingsStore::start(local(cache), immediate()).await;
        store.sync_legal_documents().await.unwrap();

        let snap = store.snapshot().unwrap();
        let legal = default_legal_documents();
        assert_eq!(snap.get("privacyPolicy"), Some(&legal.privacy_policy));
        assert_eq!(snap.get("termsOfService"), Some(&legal.terms_of_service));
        assert_eq!(snap.text(Section::Hero, "title"), Some("Kept"));
    }

    #[tokio::test]
    async fn test_writes_after_shutdown_are_rejected() {
        let store = SettingsStore::start(local(MemoryCache::new()), immediate()).await;
        store.shutdown();
        assert!(matches!(
            store.update_settings(&SiteDocument::default()).await,
            Err(StoreError::Closed)
        ));
        assert!(store.snapshot().is_some());
    }
}
