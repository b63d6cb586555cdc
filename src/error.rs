//! Service-level error definitions.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listener could not bind to the configured address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while serving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Global subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
