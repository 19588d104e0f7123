//! Arcsite Server
//!
//! Serves the site configuration document of an architecture studio's
//! marketing site and the admin API used to edit it.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use arcsite_core::persistence::{
    DocumentStore, FileCache, MemoryDocumentStore, PersistenceAdapter, PgDocumentStore,
};
use arcsite_core::SettingsStore;
use clap::Parser;
use config::ConfigLoader;
use config::runtime::StoreBackend;
use server::{build_router, run_server};
use shutdown::spawn_config_reload_handler;
use sqlx::PgPool;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Arcsite - site settings server
#[derive(Parser, Debug)]
#[command(name = "arcsite-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "ARCSITE_CONFIG", default_value = "./arcsite-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Run database migrations on startup
    #[arg(long, default_value = "false")]
    migrate: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "ARCSITE_LOG_JSON", default_value = "false")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.log_json);

    tracing::info!("Starting arcsite-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = Arc::new(ConfigLoader::new(&args.config, args.listen));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded_config.server.listen;
    tracing::info!("Configuration loaded from {:?}", args.config);

    let shared_config = loaded_config.shared();
    let store_settings = loaded_config.store;

    // Connect the document store
    let mut db_pool: Option<PgPool> = None;
    let remote: Option<Arc<dyn DocumentStore>> = match store_settings.backend {
        StoreBackend::Postgres => {
            let database_url = store_settings
                .database_url
                .as_deref()
                .ok_or(config::ConfigError::MissingDatabaseUrl)?;

            tracing::info!("Connecting to database...");
            let store = PgDocumentStore::connect(database_url, store_settings.max_connections)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    e
                })?;
            tracing::info!("Database connection established");

            if args.migrate {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("../migrations")
                    .run(store.pool())
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to run migrations: {}", e);
                        e
                    })?;
                tracing::info!("Migrations completed successfully");
            }

            db_pool = Some(store.pool().clone());
            Some(Arc::new(store) as Arc<dyn DocumentStore>)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store, edits survive restarts only through the local cache");
            Some(Arc::new(MemoryDocumentStore::new()) as Arc<dyn DocumentStore>)
        }
        StoreBackend::None => None,
    };

    if args.migrate && db_pool.is_none() {
        tracing::warn!("--migrate ignored, the store backend is not postgres");
    }

    let cache = Arc::new(FileCache::new(&store_settings.cache_path));
    tracing::info!(path = %store_settings.cache_path.display(), "Using local settings cache");

    let adapter = PersistenceAdapter::new(remote, cache);
    let settings_store = SettingsStore::start(adapter, store_settings.options()).await;

    // Create application state
    let state = AppState::new(settings_store.clone(), shared_config);

    // Spawn config reload handler (listens for SIGHUP)
    let shutdown_notify = spawn_config_reload_handler(state.clone(), config_loader);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Signal the config reload handler to stop
    shutdown_notify.notify_one();
    settings_store.shutdown();

    if let Some(pool) = db_pool {
        tracing::info!("Closing database connections...");
        pool.close().await;
    }
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
