//! hello-ping server binary.
//!
//! ```text
//! defaults → --config file → APP_ENV / HELLO_PING_* → --bind / --env
//!     → validate → init logging → bind → serve until SIGINT/SIGTERM
//! ```

use std::path::PathBuf;

use clap::Parser;

use hello_ping::config::{resolve_config, validate_config, ConfigError, RunMode, ServiceConfig};
use hello_ping::http::{bind_listener, HttpServer};
use hello_ping::lifecycle::{wait_for_signal, Shutdown};
use hello_ping::observability::init_logging;
use hello_ping::ServiceError;

#[derive(Parser)]
#[command(name = "hello-ping", version)]
#[command(about = "Serves GET / and GET /ping", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides the file and HELLO_PING_BIND_ADDRESS.
    #[arg(short, long)]
    bind: Option<String>,

    /// Run mode (development, test, production), overrides APP_ENV.
    #[arg(short, long)]
    env: Option<RunMode>,
}

fn build_config(cli: &Cli) -> Result<ServiceConfig, ServiceError> {
    let mut config = resolve_config(cli.config.as_deref(), |key| std::env::var(key).ok())?;

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(mode) = cli.env {
        config.environment = mode;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    init_logging(&config.observability, config.environment)?;

    tracing::info!("hello-ping v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = %config.environment,
        bind_address = %config.listener.bind_address,
        max_concurrent_requests = config.listener.max_concurrent_requests,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    let listener = bind_listener(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
