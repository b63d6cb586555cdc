//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → config file, TOML (loader.rs)
//!     → environment overrides, APP_ENV and HELLO_PING_* (loader.rs)
//!     → command line flags (main.rs)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    apply_env_overrides, load_config, parse_config, read_config, resolve_config, ConfigError,
};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, RunMode, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
