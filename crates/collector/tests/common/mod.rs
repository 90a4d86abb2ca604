#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use chronolog_collector::config::ServerConfig;
use chronolog_collector::recorder::RecorderClient;
use chronolog_collector::router::build_app_router;
use chronolog_collector::state::AppState;
use chronolog_db::{DbConfig, LazyClient};

/// Database parameters pointing at a port nothing listens on, so every
/// connection attempt is refused immediately.
pub fn unreachable_db() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "sa".to_string(),
        password: "unused".to_string(),
        database: "master".to_string(),
        trust_cert: true,
        encrypt: false,
    }
}

/// Build a test `ServerConfig` forwarding to `recorder_url`.
pub fn test_config(recorder_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        recorder_url: recorder_url.to_string(),
        recorder_timeout_secs: 5,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(recorder_url: &str) -> Router {
    let config = test_config(recorder_url);
    let recorder = RecorderClient::new(
        config.recorder_url.clone(),
        Duration::from_secs(config.recorder_timeout_secs),
    )
    .unwrap();

    let state = AppState {
        db: Arc::new(LazyClient::new(unreachable_db())),
        recorder: Arc::new(recorder),
    };

    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
