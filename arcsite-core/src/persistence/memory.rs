//! In-process document store.
//!
//! Behaves like a remote store shared by every adapter holding the same
//! `Arc`: writes are broadcast to all open watches. Used by the `memory`
//! backend and throughout the tests, where writes and the change stream
//! can be made to fail on demand.

use std::sync::atomic::{AtomicBool, Ordering};

use arcsite_sdk::SiteDocument;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{broadcast, mpsc, watch};

use super::{DEFAULT_CHANNEL_BUFFER, DocumentStore, PersistenceError, RemoteEvent, RemoteWatch};

pub struct MemoryDocumentStore {
    document: watch::Sender<Option<Value>>,
    failures: broadcast::Sender<String>,
    fail_writes: AtomicBool,
    unreachable: AtomicBool,
}

impl MemoryDocumentStore {
    /// A store with no document in it.
    pub fn new() -> Self {
        Self::with_initial(None)
    }

    /// A store already holding `document`.
    pub fn with_document(document: Value) -> Self {
        Self::with_initial(Some(document))
    }

    fn with_initial(initial: Option<Value>) -> Self {
        let (document, _) = watch::channel(initial);
        let (failures, _) = broadcast::channel(DEFAULT_CHANNEL_BUFFER);
        Self {
            document,
            failures,
            fail_writes: AtomicBool::new(false),
            unreachable: AtomicBool::new(false),
        }
    }

    /// The currently stored document.
    pub fn document(&self) -> Option<Value> {
        self.document.borrow().clone()
    }

    /// Make subsequent writes fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent watches fail to connect.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Report a stream error on every open watch.
    pub fn fail_streams(&self, reason: &str) {
        let _ = self.failures.send(reason.to_owned());
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn watch(&self) -> Result<RemoteWatch, PersistenceError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(PersistenceError::Connect("memory store is unreachable".into()));
        }

        let mut documents = self.document.subscribe();
        let mut failures = self.failures.subscribe();
        let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_BUFFER);

        let current = documents.borrow_and_update().clone();
        let _ = tx.try_send(RemoteEvent::Snapshot(current));

        tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    _ = tx.closed() => break,
                    changed = documents.changed() => match changed {
                        Ok(()) => RemoteEvent::Snapshot(documents.borrow_and_update().clone()),
                        Err(_) => break,
                    },
                    failed = failures.recv() => match failed {
                        Ok(reason) => RemoteEvent::Failed(reason),
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                };
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        Ok(rx)
    }

    async fn replace(&self, doc: &SiteDocument) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::WriteFailed("memory store rejected the write".into()));
        }
        self.document.send_replace(Some(doc.clone().into_value()));
        Ok(())
    }
}
