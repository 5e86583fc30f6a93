//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all proxy handler
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Answer status requests, forward everything else
//! - Drain on shutdown signal

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::ProxyConfig;
use crate::http::status::status_response;
use crate::proxy::{self, Route};
use crate::region::RegionState;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Origin used when the request has no `target-api-url` header.
    pub default_origin: Option<Arc<str>>,
    /// Region label shown on the status payload.
    pub region: RegionState,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig, region: RegionState) -> Self {
        if let Some(target) = &config.upstream.default_target {
            if let Err(e) = Url::parse(target) {
                tracing::warn!(default_target = %target, error = %e, "Default target is not a valid URL; requests relying on it will be rejected");
            }
        }

        let state = AppState {
            default_origin: config.upstream.default_target.as_deref().map(Arc::from),
            region,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            default_target = self.config.upstream.default_target.as_deref().unwrap_or("<none>"),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Main proxy handler.
/// Serves the status payload or forwards the request upstream.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let route = proxy::route(
        request.uri(),
        request.headers(),
        state.default_origin.as_deref(),
    );

    match route {
        Ok(Route::Status) => status_response(&state.region).into_response(),
        Ok(Route::Forward(target)) => match proxy::forward(target, request).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        },
        Err(e) => {
            tracing::debug!(path = %request.uri().path(), error = %e, "Rejected request");
            e.into_response()
        }
    }
}
