//! Route handler set.
//!
//! Two static routes, each returning a fixed plain-text body:
//!
//! | Method | Path    | Body          |
//! |--------|---------|---------------|
//! | GET    | `/`     | `Hello World` |
//! | GET    | `/ping` | `pong`        |
//!
//! Anything else falls through to axum's default (404, or 405 for a known
//! path with another method).

use axum::{routing::get, Router};

/// Body returned by `GET /`.
pub const HELLO_BODY: &str = "Hello World";

/// Body returned by `GET /ping`.
pub const PING_BODY: &str = "pong";

pub async fn hello() -> &'static str {
    HELLO_BODY
}

pub async fn ping() -> &'static str {
    PING_BODY
}

/// Router with both routes registered and no middleware.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/ping", get(ping))
}
