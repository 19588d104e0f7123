//! Axum server setup and router configuration.

use crate::api;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Build the main application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .nest("/api/v1", api::router())
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Simple health check - returns OK if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready check response.
#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    settings: &'static str,
    remote: bool,
}

/// Ready check - 200 once the settings store is ready, 503 while loading.
async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.store.state().is_ready();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(ReadyResponse {
            status: if ready { "ready" } else { "not_ready" },
            settings: if ready { "ready" } else { "loading" },
            remote: state.store.is_remote_configured(),
        }),
    )
}

/// Run the server with graceful shutdown support.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::{AdminConfig, ServerConfig, SharedConfig};
    use arcsite_core::persistence::{MemoryCache, MemoryDocumentStore, PersistenceAdapter};
    use arcsite_core::{SettingsStore, StoreOptions};
    use arcsite_sdk::signature::{ADMIN_AUTH_HEADER, SessionToken};
    use argon2::{
        Argon2, PasswordHasher,
        password_hash::{SaltString, rand_core::OsRng},
    };
    use axum::body::Body;
    use axum::http::{Method, Request, header};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    const SECRET: &str = "studio-secret";

    fn admin_config() -> AdminConfig {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(SECRET.as_bytes(), &salt)
            .unwrap()
            .to_string();
        AdminConfig::new(hash)
    }

    async fn app_with(adapter: PersistenceAdapter, min_loading: Duration) -> (Router, AppState) {
        let store = SettingsStore::start(adapter, StoreOptions { min_loading }).await;
        let config = SharedConfig {
            server: Arc::new(RwLock::new(ServerConfig {
                listen: SocketAddr::from(([127, 0, 0, 1], 0)),
            })),
            admin: Arc::new(RwLock::new(admin_config())),
        };
        let state = AppState::new(store, config);
        (build_router(state.clone()), state)
    }

    async fn local_app() -> (Router, AppState) {
        app_with(
            PersistenceAdapter::local_only(Arc::new(MemoryCache::new())),
            Duration::ZERO,
        )
        .await
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn admin(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(ADMIN_AUTH_HEADER, SECRET);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (router, _) = local_app().await;
        let (status, body) = send(&router, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&router, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["settings"], "ready");
        assert_eq!(body["remote"], false);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_ready_during_loading_window() {
        let (router, _) = app_with(
            PersistenceAdapter::local_only(Arc::new(MemoryCache::new())),
            Duration::from_secs(2),
        )
        .await;
        let (status, body) = send(&router, get("/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["settings"], "loading");

        // The document is already there, only readiness waits.
        let (status, _) = send(&router, get("/api/v1/site/settings")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_site_endpoints() {
        let (router, _) = local_app().await;

        let (status, body) = send(&router, get("/api/v1/site/settings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact"]["email"], "zionicarc@gmail.com");

        let (_, body) = send(&router, get("/api/v1/site/sections")).await;
        assert_eq!(body["sections"][0], "hero");
        assert_eq!(body["sections"].as_array().unwrap().len(), 11);

        let request = Request::get("/api/v1/site/contact")
            .header(header::USER_AGENT, "Mozilla/5.0 (Linux; Android 14)")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(&router, request).await;
        assert_eq!(body["tel"], "tel:+919986598000");
        assert_eq!(body["preferred_email"], "mailto:zionicarc@gmail.com");
    }

    #[tokio::test]
    async fn test_admin_requires_credentials() {
        let (router, _) = local_app().await;
        let (status, _) = send(&router, get("/api/v1/admin/settings")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::get("/api/v1/admin/settings")
            .header(ADMIN_AUTH_HEADER, "wrong")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::get("/api/v1/admin/settings")
            .header(header::AUTHORIZATION, "Bearer nonsense")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_and_bearer_session() {
        let (router, state) = local_app().await;

        let request = Request::post("/api/v1/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "secret": "nope" }).to_string()))
            .unwrap();
        let (status, _) = send(&router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::post("/api/v1/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "secret": SECRET }).to_string()))
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_owned();

        let request = Request::get("/api/v1/admin/overview")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["services"], 6);
        assert_eq!(body["gallery_sections"], 2);

        // Rotating the secret invalidates outstanding sessions.
        *state.config.admin.write().await = AdminConfig::new("$argon2id$rotated".into());
        let request = Request::get("/api/v1/admin/overview")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let (router, state) = local_app().await;
        let key = state.config.admin.read().await.session_key();
        let past = time::OffsetDateTime::now_utc().unix_timestamp() - 10;
        let token = SessionToken::issue_at(past, &key).to_header();

        let request = Request::get("/api/v1/admin/settings")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "session expired");
    }

    #[tokio::test]
    async fn test_replace_settings_echoes_locally() {
        let (router, state) = local_app().await;
        let (status, body) = send(
            &router,
            admin(
                Method::PUT,
                "/api/v1/admin/settings",
                Some(json!({ "hero": { "title": "Replaced" } })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "persisted": true, "applied_locally": true }));

        let snap = state.store.snapshot().unwrap();
        assert_eq!(snap.get("hero").unwrap()["title"], "Replaced");
        // Merged onto defaults.
        assert!(snap.get("hero").unwrap()["tagline"].is_string());
    }

    #[tokio::test]
    async fn test_failed_remote_write_is_bad_gateway() {
        let remote = Arc::new(MemoryDocumentStore::new());
        remote.set_fail_writes(true);
        let (router, state) = app_with(
            PersistenceAdapter::new(Some(remote), Arc::new(MemoryCache::new())),
            Duration::ZERO,
        )
        .await;
        state.store.wait_ready().await.unwrap();

        let (status, body) = send(
            &router,
            admin(
                Method::PUT,
                "/api/v1/admin/settings",
                Some(json!({ "showGallery": false })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["persisted"], false);
        assert_eq!(body["applied_locally"], true);
        assert!(body["error"].is_string());

        let (_, body) = send(&router, get("/api/v1/site/sections")).await;
        assert!(
            !body["sections"]
                .as_array()
                .unwrap()
                .contains(&json!("gallery"))
        );
    }

    #[tokio::test]
    async fn test_remote_write_is_not_reported_as_applied_locally() {
        let remote = Arc::new(MemoryDocumentStore::new());
        let (router, state) = app_with(
            PersistenceAdapter::new(Some(remote.clone()), Arc::new(MemoryCache::new())),
            Duration::ZERO,
        )
        .await;
        state.store.wait_ready().await.unwrap();

        let (status, body) = send(
            &router,
            admin(
                Method::PUT,
                "/api/v1/admin/settings",
                Some(json!({ "hero": { "title": "Remote" } })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "persisted": true, "applied_locally": false }));
        assert_eq!(remote.document().unwrap()["hero"]["title"], "Remote");
    }

    #[tokio::test]
    async fn test_apply_edits() {
        let (router, state) = local_app().await;
        let edits = json!({
            "edits": [
                { "op": "set_field", "path": "contact.email", "value": "hi@studio.in" },
                { "op": "add_item", "list": "services.items" },
                { "op": "toggle_section", "section": "approach" },
            ]
        });
        let (status, _) = send(
            &router,
            admin(Method::POST, "/api/v1/admin/settings/edits", Some(edits)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let snap = state.store.snapshot().unwrap();
        assert_eq!(snap.get("contact").unwrap()["email"], "hi@studio.in");
        assert_eq!(
            snap.get("services").unwrap()["items"].as_array().unwrap().len(),
            7
        );
        assert_eq!(snap.get("showApproach"), Some(&json!(false)));
    }

    #[tokio::test]
    async fn test_rejected_edit_writes_nothing() {
        let (router, state) = local_app().await;
        let before = state.store.snapshot().unwrap();
        let edits = json!({
            "edits": [
                { "op": "set_field", "path": "hero.title", "value": "Changed" },
                { "op": "toggle_section", "section": "hero" },
            ]
        });
        let (status, body) = send(
            &router,
            admin(Method::POST, "/api/v1/admin/settings/edits", Some(edits)),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["index"], 1);
        assert_eq!(state.store.snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_legal_endpoints() {
        let (router, state) = local_app().await;
        let (status, defaults) = send(
            &router,
            admin(Method::GET, "/api/v1/admin/legal/defaults", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(defaults["privacyPolicy"]["sections"].is_array());

        let edits = json!({
            "edits": [
                { "op": "set_field", "path": "termsOfService.sections[0].title", "value": "Edited" },
            ]
        });
        send(
            &router,
            admin(Method::POST, "/api/v1/admin/settings/edits", Some(edits)),
        )
        .await;

        let (status, _) = send(
            &router,
            admin(Method::POST, "/api/v1/admin/legal/sync", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let snap = state.store.snapshot().unwrap();
        assert_eq!(snap.get("termsOfService"), Some(&defaults["termsOfService"]));
    }
}
