//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, body limit, panic recovery)
//! - Inject the submission store into handlers
//! - Bind server to listener and drive graceful shutdown

use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::http::response::ApiError;
use crate::submissions::SubmissionStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
}

/// HTTP server for the form backend.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and a fresh
    /// store.
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, Arc::new(SubmissionStore::new()))
    }

    /// Create a server around an externally owned store.
    ///
    /// Tests inject their own store to inspect state without going through
    /// the HTTP surface.
    pub fn with_store(config: AppConfig, store: Arc<SubmissionStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        // Cross-origin requests permitted from any origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/submit-form", post(handlers::submit_form))
            .route("/submissions", get(handlers::list_submissions))
            .route("/health", get(handlers::health))
            .route("/", get(handlers::service_info))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Map a handler panic to the generic 500 envelope, logging the detail
/// server-side only.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(error = %detail, "Request handler panicked");

    ApiError::Internal.into_response()
}
