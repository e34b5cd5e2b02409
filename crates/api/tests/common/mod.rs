//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as `main.rs`)
//! and drives it with `tower::ServiceExt::oneshot`, no TCP listener needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bankadvice_api::auth::jwt::{generate_access_token, JwtConfig};
use bankadvice_api::config::ServerConfig;
use bankadvice_api::router::build_app_router;
use bankadvice_api::state::AppState;
use bankadvice_core::roles::ROLE_ADMIN;
use bankadvice_core::types::DbId;
use bankadvice_events::EventBus;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
    };
    build_app_router(state, &config)
}

/// Mint an access token for an arbitrary principal.
pub fn token_for(user_id: DbId, login: &str, role: &str) -> String {
    generate_access_token(user_id, login, role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Mint an admin token for tests that are not about authorization.
pub fn admin_token() -> String {
    token_for(1, "admin", ROLE_ADMIN)
}

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<(&'static str, serde_json::Value)>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some((content_type, json)) => builder
            .header("content-type", content_type)
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };
    app.oneshot(request).await.expect("request must not fail")
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    send(app, "GET", uri, Some(token), None).await
}

/// GET without an Authorization header (401 paths).
pub async fn get_anonymous(app: Router, uri: &str) -> Response {
    send(app, "GET", uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, "POST", uri, Some(token), Some(("application/json", body))).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, "PUT", uri, Some(token), Some(("application/json", body))).await
}

/// PATCH with the merge-patch content type the partial-update contract uses.
pub async fn patch_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(
        app,
        "PATCH",
        uri,
        Some(token),
        Some(("application/merge-patch+json", body)),
    )
    .await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    send(app, "DELETE", uri, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}
