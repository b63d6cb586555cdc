//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{RunMode, ServiceConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `listener.bind_address`.
pub const ENV_BIND_ADDRESS: &str = "HELLO_PING_BIND_ADDRESS";
/// Overrides `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "HELLO_PING_LOG_LEVEL";
/// Overrides `observability.log_format`.
pub const ENV_LOG_FORMAT: &str = "HELLO_PING_LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown run mode '{0}' (expected development, test or production)")]
    UnknownRunMode(String),

    #[error("Unknown log format '{0}' (expected pretty, compact or json)")]
    InvalidLogFormat(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document into a configuration. Does not validate.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML file. Does not validate.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let config = read_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Layer defaults, an optional file and environment overrides.
///
/// Validation is left to the caller so later layers (command line flags)
/// can still replace a file value that would not validate on its own.
pub fn resolve_config<F>(path: Option<&Path>, lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };
    apply_env_overrides(&mut config, lookup)?;
    Ok(config)
}

/// Apply environment overrides on top of `config`.
///
/// `lookup` resolves a variable name to its value, so tests can pass a
/// map instead of touching the process environment.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup(RunMode::ENV_VAR) {
        config.environment = mode.parse()?;
    }
    if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }
    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        config.observability.log_format = format.parse()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            environment = "production"

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, RunMode::Production);
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        // Untouched sections keep their defaults
        assert_eq!(config.listener.max_concurrent_requests, 1024);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_parse_sample_config() {
        let config = parse_config(include_str!("../../config/hello-ping.toml")).unwrap();
        assert_eq!(config.environment, RunMode::Production);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("[listener]\nport = 80\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/hello-ping.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_env_replaces_invalid_file_value() {
        let path = write_temp("hello-ping-bad-bind", "[listener]\nbind_address = \"nowhere\"\n");

        // The file on its own does not validate
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let config = resolve_config(Some(&path), env(&[(ENV_BIND_ADDRESS, "127.0.0.1:0")])).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_resolve_without_file() {
        let config = resolve_config(None, env(&[("APP_ENV", "prod")])).unwrap();
        assert_eq!(config.environment, RunMode::Production);
        assert_eq!(config.listener, ServiceConfig::default().listener);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("APP_ENV", "test"),
                (ENV_BIND_ADDRESS, "127.0.0.1:0"),
                (ENV_LOG_LEVEL, "debug"),
                (ENV_LOG_FORMAT, "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.environment, RunMode::Test);
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides_absent() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_env_override_bad_mode() {
        let mut config = ServiceConfig::default();
        let err = apply_env_overrides(&mut config, env(&[("APP_ENV", "staging")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRunMode(ref m) if m == "staging"));
    }
}
