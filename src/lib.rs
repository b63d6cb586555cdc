//! Minimal HTTP service answering `GET /` and `GET /ping`.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use http::{HttpServer, HELLO_BODY, PING_BODY};
pub use lifecycle::Shutdown;
