//! Server binary for the simulated latency data API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `latency-config.yaml` (or `$LATENCY_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build shared application state
//! 4. Serve until Ctrl-C

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use latency_api::{AppState, LoggingConfig, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "latency-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so remember where it
    //    came from and report after the subscriber is installed.
    let config_path = config_path();
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;

    info!("latency-server starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        service_name = config.server.service_name,
        log_level = config.logging.level,
        json_logs = config.logging.json,
        "Server configuration"
    );

    // 3. Build shared state.
    let state = Arc::new(AppState::new(config.server.service_name.clone()));

    // 4. Serve until Ctrl-C.
    latency_api::start_server(&config.server, Arc::clone(&state))
        .await
        .map_err(ServerBinError::from)?;

    info!(
        requests_served = state.requests_served(),
        uptime_secs = state.uptime().as_secs(),
        "latency-server stopped"
    );

    Ok(())
}

/// Resolve the configuration path from `$LATENCY_CONFIG` or the default.
fn config_path() -> PathBuf {
    std::env::var_os("LATENCY_CONFIG").map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, falling back to defaults when the file is absent.
///
/// Returns the config and whether it was read from disk. Environment
/// overrides apply in both cases.
fn load_config(path: &Path) -> Result<(ServiceConfig, bool), ServerBinError> {
    if path.exists() {
        Ok((ServiceConfig::from_file(path)?, true))
    } else {
        let mut config = ServiceConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerBinError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let result = if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    result.map_err(|e| ServerBinError::Logging {
        message: format!("{e}"),
    })
}
