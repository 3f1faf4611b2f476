//! HTTP endpoint handlers for the latency API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/health` | Liveness probe |
//! | `GET` | `/api/v1/{delay}/{type}` | Delayed fixture envelope |
//! | `GET` | `/api/test` | Delayed `{ delay, unit }` (`?ms=N` optional) |

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use axum::Json;
use latency_types::{ApiEnvelope, TestDelay};
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::envelope;
use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/v1/{delay}/{type}
// ---------------------------------------------------------------------------

/// Wait for the requested delay, then return the fixture envelope.
///
/// Always responds `200`. Malformed delays and unknown types degrade to a
/// fallback wait and an empty `data` object. Segments that axum refuses to
/// decode (e.g. percent-encoded bytes that are not UTF-8) are recovered
/// from the raw path with lossy decoding instead of being rejected.
pub async fn get_fixture(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
    uri: Uri,
) -> Json<ApiEnvelope> {
    state.record_request();
    let (delay, fixture_type) = match path {
        Ok(Path(segments)) => segments,
        Err(rejection) => {
            debug!(error = %rejection, path = uri.path(), "decoding path segments lossily");
            lossy_fixture_segments(uri.path())
        }
    };
    Json(envelope::respond(&fixture_type, &delay).await)
}

/// Pull `(delay, type)` out of `/api/v1/{delay}/{type}`, replacing invalid
/// UTF-8 with U+FFFD.
fn lossy_fixture_segments(path: &str) -> (String, String) {
    let mut segments = path
        .trim_start_matches('/')
        .split('/')
        .skip(2)
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned());
    let delay = segments.next().unwrap_or_default();
    let fixture_type = segments.next().unwrap_or_default();
    (delay, fixture_type)
}

// ---------------------------------------------------------------------------
// GET /api/test
// ---------------------------------------------------------------------------

/// Wait for a random (or requested) delay and report it.
///
/// The query is read as raw pairs so repeated or unexpected keys never
/// cause a rejection. The first `ms` wins; without one the delay is random.
pub async fn get_test(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<TestDelay> {
    state.record_request();
    let ms = pairs
        .iter()
        .find(|(key, _)| key == "ms")
        .map(|(_, value)| value.as_str());
    Json(envelope::respond_test(ms).await)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.service_name,
    }))
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing uptime, traffic, and example links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let name = &state.service_name;
    let uptime_secs = state.uptime().as_secs();
    let served = state.requests_served();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{name}</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>{name}</h1>

    <div>
        <div class="metric">
            <div class="label">Uptime (s)</div>
            <div class="value">{uptime_secs}</div>
        </div>
        <div class="metric">
            <div class="label">Requests</div>
            <div class="value">{served}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/v1/100/weather">/api/v1/100/weather</a> -- weather after 100ms</li>
        <li><a href="/api/v1/750/news">/api/v1/750/news</a> -- news after 750ms</li>
        <li><a href="/api/v1/1500/stats">/api/v1/1500/stats</a> -- stats after 1500ms</li>
        <li><a href="/api/v1/0/profile">/api/v1/0/profile</a> -- profile immediately</li>
        <li><a href="/api/test">/api/test</a> -- random delay (?ms=N to choose)</li>
        <li><a href="/health">/health</a> -- liveness probe</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// JSON 404 for any unmatched route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_segments_replace_invalid_utf8() {
        assert_eq!(
            lossy_fixture_segments("/api/v1/%FF/weather"),
            (String::from("\u{FFFD}"), String::from("weather"))
        );
        assert_eq!(
            lossy_fixture_segments("/api/v1/100/%FF"),
            (String::from("100"), String::from("\u{FFFD}"))
        );
    }

    #[test]
    fn lossy_segments_decode_valid_escapes() {
        assert_eq!(
            lossy_fixture_segments("/api/v1/1%30/news"),
            (String::from("10"), String::from("news"))
        );
    }
}
