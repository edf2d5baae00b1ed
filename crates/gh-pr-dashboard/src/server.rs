//! Dashboard HTTP server
//!
//! Serves the rendered dashboard on `GET /` and a liveness probe on
//! `GET /healthz`. Every request is logged; a panicking handler turns into
//! a 500 response instead of taking the server down.

use crate::render;
use crate::state::DashboardState;
use anyhow::Context;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{from_fn, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to render dashboard: {0}")]
    Render(#[from] std::fmt::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Build the dashboard router
pub fn router(state: DashboardState) -> Router {
    with_middleware(
        Router::new()
            .route("/", get(index))
            .route("/healthz", get(health_check)),
    )
    .with_state(state)
}

/// Wrap routes with panic recovery and request logging
fn with_middleware<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(CatchPanicLayer::new())
        .layer(from_fn(log_requests))
}

/// Bind `addr` and serve the dashboard until Ctrl-C
pub async fn serve(addr: &str, state: DashboardState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dashboard server failed")?;

    log::info!("Dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn index(State(state): State<DashboardState>) -> Result<Html<String>, DashboardError> {
    let snapshot = state.snapshot();
    Ok(Html(render::render_dashboard(&snapshot)?))
}

async fn health_check() -> &'static str {
    "ok"
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({:?})",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
