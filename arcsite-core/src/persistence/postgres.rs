//! Postgres-backed document store.
//!
//! The document lives in one JSONB row of `site_documents`. A trigger
//! publishes the row id on [`CHANGE_CHANNEL`] after every insert or update,
//! so every server sharing the database observes every write.

use std::time::Duration;

use arcsite_sdk::SiteDocument;
use async_trait::async_trait;
use kanau::processor::Processor;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::{PgListener, PgPoolOptions};
use sqlx::types::Json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{DEFAULT_CHANNEL_BUFFER, DocumentStore, PersistenceError, RemoteEvent, RemoteWatch};
use crate::framework::DatabaseProcessor;

/// Row id of the settings document.
pub const SETTINGS_DOCUMENT_ID: &str = "global";

/// Notification channel the `site_documents` trigger publishes on.
pub const CHANGE_CHANNEL: &str = "site_document_changed";

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
/// Fetch the stored body of a document.
pub struct GetSiteDocument {
    pub id: &'static str,
}

impl Processor<GetSiteDocument> for DatabaseProcessor {
    type Output = Option<Value>;
    type Error = sqlx::Error;
    #[tracing::instrument(skip_all, err, name = "SQL:GetSiteDocument")]
    async fn process(&self, query: GetSiteDocument) -> Result<Option<Value>, sqlx::Error> {
        let body = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT body FROM site_documents WHERE id = $1",
        )
        .bind(query.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(body.map(|Json(value)| value))
    }
}

#[derive(Debug, Clone)]
/// Insert or overwrite a document body.
pub struct ReplaceSiteDocument {
    pub id: &'static str,
    pub body: Value,
}

impl Processor<ReplaceSiteDocument> for DatabaseProcessor {
    type Output = ();
    type Error = sqlx::Error;
    #[tracing::instrument(skip_all, err, name = "SQL:ReplaceSiteDocument")]
    async fn process(&self, replace: ReplaceSiteDocument) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO site_documents (id, body, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (id) DO UPDATE
            SET body = EXCLUDED.body, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(replace.id)
        .bind(Json(replace.body))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Document store over a Postgres pool.
pub struct PgDocumentStore {
    db: DatabaseProcessor,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: DatabaseProcessor::new(pool),
        }
    }

    /// Connect a new pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.db.pool
    }
}

fn connect_error(e: sqlx::Error) -> PersistenceError {
    PersistenceError::Connect(e.to_string())
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn watch(&self) -> Result<RemoteWatch, PersistenceError> {
        let mut listener = PgListener::connect_with(&self.db.pool)
            .await
            .map_err(connect_error)?;
        listener.listen(CHANGE_CHANNEL).await.map_err(connect_error)?;

        let initial = self
            .db
            .process(GetSiteDocument {
                id: SETTINGS_DOCUMENT_ID,
            })
            .await?;

        let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_BUFFER);
        let _ = tx.try_send(RemoteEvent::Snapshot(initial));

        info!(channel = CHANGE_CHANNEL, "Listening for settings changes");
        tokio::spawn(listen_loop(self.db.clone(), listener, tx));
        Ok(rx)
    }

    async fn replace(&self, doc: &SiteDocument) -> Result<(), PersistenceError> {
        self.db
            .process(ReplaceSiteDocument {
                id: SETTINGS_DOCUMENT_ID,
                body: doc.clone().into_value(),
            })
            .await
            .map_err(|e| PersistenceError::WriteFailed(e.to_string()))
    }
}

async fn listen_loop(
    db: DatabaseProcessor,
    mut listener: PgListener,
    tx: mpsc::Sender<RemoteEvent>,
) {
    // Set after a connection error; the next successful round refetches
    // since notifications may have been missed.
    let mut resync = false;

    loop {
        if resync {
            match db.process(GetSiteDocument { id: SETTINGS_DOCUMENT_ID }).await {
                Ok(doc) => {
                    resync = false;
                    if tx.send(RemoteEvent::Snapshot(doc)).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Settings refetch failed, retrying");
                    tokio::select! {
                        _ = tx.closed() => break,
                        _ = tokio::time::sleep(RECONNECT_DELAY) => continue,
                    }
                }
            }
        }

        let received = tokio::select! {
            _ = tx.closed() => break,
            received = listener.recv() => received,
        };

        match received {
            Ok(notification) => {
                if notification.payload() != SETTINGS_DOCUMENT_ID {
                    continue;
                }
                let event = match db.process(GetSiteDocument { id: SETTINGS_DOCUMENT_ID }).await {
                    Ok(doc) => RemoteEvent::Snapshot(doc),
                    Err(e) => {
                        resync = true;
                        RemoteEvent::Failed(e.to_string())
                    }
                };
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Settings listener lost its connection");
                if tx.send(RemoteEvent::Failed(e.to_string())).await.is_err() {
                    break;
                }
                resync = true;
                tokio::select! {
                    _ = tx.closed() => break,
                    _ = tokio::time::sleep(RECONNECT_DELAY) => {}
                }
            }
        }
    }
    debug!("Settings listener stopped");
}
