//! Viewer HTTP server lifecycle.
//!
//! [`start_server`] binds the listener, serves the viewer router, and
//! drains in-flight requests on Ctrl-C. Evolution sequences still running
//! at shutdown are dropped with the runtime.

use std::net::SocketAddr;
use std::sync::Arc;

use pokevo_core::SpeciesCatalog;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Listen address for the viewer.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Parse `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the host is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address {}: {e}", self.host)))
    }
}

/// Serve the viewer until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot bind, or
/// serving fails with an I/O error.
pub async fn start_server<C>(
    config: &ServerConfig,
    state: Arc<AppState<C>>,
) -> Result<(), ServerError>
where
    C: SpeciesCatalog + 'static,
{
    let addr = config.socket_addr()?;
    let sprites = state.sprite_base_url.clone();
    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, sprites = %sprites, "viewer listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("viewer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable, serving until killed");
        std::future::pending::<()>().await;
    }
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
