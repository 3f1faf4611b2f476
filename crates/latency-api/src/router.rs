//! Axum router construction for the latency API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /health` -- liveness probe
/// - `GET /api/v1/{delay}/{type}` -- delayed fixture envelope
/// - `GET /api/test` -- delayed `{ delay, unit }`
///
/// Unmatched paths get a JSON 404. CORS allows any origin so demo pages
/// served from elsewhere can call the API directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Latency API
        .route("/api/v1/{delay}/{type}", get(handlers::get_fixture))
        .route("/api/test", get(handlers::get_test))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
