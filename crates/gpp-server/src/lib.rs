//! HTTP front end for the power plant dashboard.
//!
//! Serves a single HTML page plus a JSON API of Plotly figures. The dataset
//! and the country-independent choropleth live in an immutable
//! [`DashboardState`] shared by every request; the country-filtered figures
//! are recomputed per request.

pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use routes::router;
pub use state::DashboardState;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: Arc<DashboardState>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding dashboard server to {addr}"))?;
    info!(%addr, countries = state.countries.len(), "serving dashboard");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("dashboard server failed")?;
    info!("dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
