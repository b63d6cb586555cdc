//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router from the route handler set
//! - Wire up middleware (request ID, tracing, timeout, concurrency limit)
//! - Bind the listener and serve with graceful shutdown

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ListenerConfig, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::routes::routes;

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added last run first: request id is stamped before the trace
    /// span opens, and the concurrency limit sits closest to the handlers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        routes()
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_concurrent_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires or its sender is dropped.
    ///
    /// In-flight requests are drained before this returns.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> ServiceResult<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Bind a TCP listener to the configured address.
pub async fn bind_listener(config: &ListenerConfig) -> ServiceResult<TcpListener> {
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ServiceError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        max_concurrent_requests = config.max_concurrent_requests,
        "Listener bound"
    );

    Ok(listener)
}
