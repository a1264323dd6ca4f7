//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both handlers
//! - Wire up middleware (CORS, request ID, tracing, access log)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::access_log::access_log;
use crate::http::cors::cors_layer;
use crate::http::handlers::{health_check, submit_query};
use crate::lifecycle::ShutdownSignal;
use crate::observability::Reporter;
use crate::upstream::Collaborator;

/// Error type for server construction.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS {kind} `{value}`")]
    Cors { kind: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub collaborator: Collaborator,
    pub reporter: Arc<dyn Reporter>,
    pub answer_delay: Duration,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
    reporter: Arc<dyn Reporter>,
}

impl RelayServer {
    /// Create a new server. Console output goes to `reporter`.
    pub fn new(config: RelayConfig, reporter: Arc<dyn Reporter>) -> Result<Self, ServerError> {
        let state = AppState {
            collaborator: Collaborator::new(config.upstream.url.clone())?,
            reporter: reporter.clone(),
            answer_delay: config.upstream.answer_delay(),
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self {
            router,
            config,
            reporter,
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost-last: CORS answers preflights before anything
    /// else, and the access log sits directly in front of the handlers.
    fn build_router(config: &RelayConfig, state: AppState) -> Result<Router, ServerError> {
        let cors = cors_layer(&config.cors)?;

        Ok(Router::new()
            .route("/query", post(submit_query))
            .route("/health", get(health_check))
            .layer(middleware::from_fn_with_state(state.clone(), access_log))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(cors))
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run the server on `listener` until `shutdown` fires.
    ///
    /// In-flight requests are allowed to finish once shutdown begins.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            answer_delay_ms = self.config.upstream.answer_delay_ms,
            "HTTP server starting"
        );
        self.reporter.started(addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
