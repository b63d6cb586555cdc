//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request id, per-request span)
//!     → routes.rs (GET / and GET /ping)
//!     → Send to client
//! ```

pub mod request;
pub mod routes;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use routes::{routes, HELLO_BODY, PING_BODY};
pub use server::{bind_listener, HttpServer};
