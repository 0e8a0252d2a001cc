//! HTTP server startup

use anyhow::{Context, Result};
use axum::serve;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use crate::application::app_context::AppContext;
use crate::server::routing::create_router;

/// Serve the form until the process is stopped.
/// The context is already fully loaded, so a bad artifact never
/// gets as far as binding the port.
pub async fn start_server(ctx: AppContext, addr: SocketAddr) -> Result<()> {
    let app = create_router(Arc::new(ctx));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    tracing::info!("Crop yield predictor listening on http://{addr}");

    serve(listener, app)
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}
