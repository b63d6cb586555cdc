//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, server, lifecycle
//!     → tracing events and spans (request id on every request span)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
