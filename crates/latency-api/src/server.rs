//! HTTP server lifecycle management.
//!
//! [`start_server`] binds the configured address and serves until Ctrl-C.
//! [`serve`] runs on an already-bound listener with a caller-supplied
//! shutdown future, which is what tests use with port `0`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Service name used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "latency-api";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Name reported by `/health` and the status page.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl ServerConfig {
    /// Parse `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the pair is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| ServerError::Bind(format!("invalid address {addr}: {e}")))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service_name: default_service_name(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    3000
}

fn default_service_name() -> String {
    String::from(DEFAULT_SERVICE_NAME)
}

/// Start the HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until Ctrl-C. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns an error if the address is invalid, the TCP listener cannot
/// bind, or the server encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    serve(listener, state, shutdown_signal()).await
}

/// Serve the router on an already-bound listener.
///
/// In-flight requests are allowed to finish once `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the server hits a fatal I/O error.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no local address: {e}")))?;
    let router = build_router(state);

    info!(%addr, "latency API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!(%addr, "latency API stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C.
///
/// If the signal handler cannot be installed this never resolves, so the
/// server keeps running rather than shutting down immediately.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn invalid_host_is_a_bind_error() {
        let config = ServerConfig {
            host: String::from("not an address"),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(ServerError::Bind(_))));
    }

    #[tokio::test]
    async fn serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await;
        assert!(listener.is_ok());
        let Ok(listener) = listener else { return };

        let result = serve(listener, Arc::new(AppState::default()), async {}).await;
        assert!(result.is_ok());
    }
}
