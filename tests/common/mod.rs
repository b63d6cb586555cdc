//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use hello_ping::config::loader::ENV_BIND_ADDRESS;
use hello_ping::config::{resolve_config, validate_config, RunMode, ServiceConfig};
use hello_ping::http::{bind_listener, HttpServer};
use hello_ping::observability::init_logging;
use hello_ping::{ServiceResult, Shutdown};

/// Environment seen by the harness: `APP_ENV=test` and an ephemeral
/// loopback port. Passed as a lookup so the process environment is
/// never mutated across parallel tests.
fn test_env(key: &str) -> Option<String> {
    match key {
        "APP_ENV" => Some("test".into()),
        ENV_BIND_ADDRESS => Some("127.0.0.1:0".into()),
        _ => None,
    }
}

/// Configuration for tests, resolved the same way the binary does it.
pub fn test_config() -> ServiceConfig {
    let config = resolve_config(None, test_env).unwrap();
    validate_config(&config).unwrap();
    assert_eq!(config.environment, RunMode::Test);
    config
}

/// In-process application: the fully layered router, no socket.
#[allow(dead_code)]
pub fn app() -> Router {
    let config = test_config();
    // Only the first call per test binary installs the subscriber
    let _ = init_logging(&config.observability, config.environment);
    HttpServer::new(config).router()
}

/// Issue a synthetic GET against the router and collect status and body.
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// A server running on a loopback socket.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<ServiceResult<()>>,
}

/// Bind to an ephemeral port and serve in the background.
#[allow(dead_code)]
pub async fn spawn_server() -> RunningServer {
    let config = test_config();
    let listener = bind_listener(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(HttpServer::new(config).run(listener, server_shutdown));

    RunningServer { addr, shutdown, handle }
}
