//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Pick the output format (pretty, compact, JSON)
//! - Resolve the log filter from `RUST_LOG`, run mode and config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` always wins over configuration
//! - Test mode is quiet (`warn`) and writes through the test harness

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig, RunMode};
use crate::error::ServiceError;

/// Filter used when nothing else is configured in test mode.
const TEST_FILTER: &str = "warn";

/// Build the default filter directives for a configured level.
///
/// An unparseable `log_level` falls back to `info`; `validate_config`
/// rejects those before logging starts.
pub fn default_directives(config: &ObservabilityConfig, mode: RunMode) -> String {
    if mode.is_test() {
        return TEST_FILTER.to_string();
    }
    let level = config
        .level_filter()
        .unwrap_or(LevelFilter::INFO)
        .to_string()
        .to_ascii_lowercase();
    format!("hello_ping={level},tower_http={level}")
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &ObservabilityConfig, mode: RunMode) -> Result<(), ServiceError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(config, mode)))
        .map_err(|e| ServiceError::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match (config.log_format, mode.is_test()) {
        (LogFormat::Json, true) => registry.with(fmt::layer().json().with_test_writer()).try_init(),
        (LogFormat::Json, false) => registry.with(fmt::layer().json()).try_init(),
        (LogFormat::Compact, true) => registry.with(fmt::layer().compact().with_test_writer()).try_init(),
        (LogFormat::Compact, false) => registry.with(fmt::layer().compact()).try_init(),
        (LogFormat::Pretty, true) => registry.with(fmt::layer().pretty().with_test_writer()).try_init(),
        (LogFormat::Pretty, false) => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| ServiceError::Logging(e.to_string()))
}
