//! Simulated latency data API.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /api/v1/{delay}/{type}`** -- waits for the requested delay
//!   (clamped to 0..=2000 ms) and returns a canned fixture payload wrapped
//!   in a `{ type, delay, data }` envelope
//! - **`GET /api/test[?ms=N]`** -- waits for a random or requested delay and
//!   reports it as `{ delay, unit }`
//! - **`GET /health`** and a minimal HTML status page at `GET /`
//!
//! # Architecture
//!
//! ```text
//! request --> delay (resolve) --> sleep --> fixtures (lookup) --> envelope --> JSON
//! ```
//!
//! Handlers share no mutable state apart from a relaxed request counter.
//! The only suspension point is a `tokio::time::sleep`, so any number of
//! slow requests can be in flight at once without starving each other.

pub mod config;
pub mod delay;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, LoggingConfig, ServiceConfig};
pub use router::build_router;
pub use server::{serve, shutdown_signal, start_server, ServerConfig, ServerError};
pub use startup::spawn_server;
pub use state::AppState;
