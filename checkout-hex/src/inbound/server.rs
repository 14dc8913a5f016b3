//! HTTP Server configuration and startup.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use checkout_types::PaymentProvider;

use super::handlers::{self, AppState};
use crate::CheckoutService;
use crate::openapi::ApiDoc;

/// Directory the browser bundle is served from.
const CLIENT_DIR: &str = "client";

/// HTTP Server for the checkout gateway.
pub struct HttpServer<P: PaymentProvider> {
    state: Arc<AppState<P>>,
    static_dir: PathBuf,
}

impl<P: PaymentProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: CheckoutService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            static_dir: PathBuf::from(CLIENT_DIR),
        }
    }

    /// Overrides the static asset directory (tests point this at a temp dir).
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/health", get(handlers::health))
            .route("/api/token", post(handlers::client_token::<P>))
            .route("/api/orders", post(handlers::create_order::<P>))
            .route(
                "/api/orders/{order_id}/capture",
                post(handlers::capture_order::<P>),
            )
            .route(
                "/api/orders/{order_id}/authorize",
                post(handlers::authorize_order::<P>),
            )
            // Lives outside /api, matching the original surface.
            .route(
                "/orders/{authorization_id}/captureAuthorize",
                post(handlers::capture_authorization::<P>),
            )
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
