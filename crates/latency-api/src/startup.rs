//! Background startup helper for embedding the API in another binary.
//!
//! [`spawn_server`] launches the server on a background Tokio task and
//! hands back the [`JoinHandle`].

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{ServerConfig, ServerError};
use crate::state::AppState;

/// Spawn the HTTP server on a background Tokio task.
///
/// The address is validated before spawning so obvious misconfiguration
/// surfaces to the caller instead of only in the logs. Bind and serve
/// failures after that point are logged by the task.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if `host:port` is not a valid address.
pub fn spawn_server(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, ServerError> {
    let addr = config.socket_addr()?;
    let config = config.clone();

    let handle = tokio::spawn(async move {
        if let Err(e) = crate::server::start_server(&config, state).await {
            tracing::error!(error = %e, "latency API exited with error");
        }
    });

    tracing::info!(%addr, "latency API spawned on background task");

    Ok(handle)
}
