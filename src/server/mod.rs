//! HTTP surface: the JSON API at `/` and the HTML page at `/ui`.

mod api;
pub mod ui;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::bridge::Bridge;

/// State shared across handlers.
pub struct AppState {
    pub bridge: Bridge,
    /// The one origin whose browser requests are allowed, with credentials.
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(bridge: Bridge, allowed_origin: &str) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(allowed_origin)
            .with_context(|| format!("invalid allowed origin: {allowed_origin:?}"))?;
        Ok(Self {
            bridge,
            allowed_origin,
        })
    }
}

/// Credentialed CORS cannot use `*`, so methods and headers mirror the preflight.
fn cors(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the application. Nothing global: the caller owns the router and
/// decides where it is served.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors(state.allowed_origin.clone());
    Router::new()
        .route("/", post(api::communicate))
        .route("/ui", get(ui::show).post(ui::submit))
        .layer(cors)
        .with_state(state)
}

/// Resolve a configured host (IP literal or name) to the first address it maps to.
pub async fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr> {
    tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("cannot resolve host {host:?}"))?
        .next()
        .with_context(|| format!("host {host:?} resolved to no addresses"))
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("server error")
}
