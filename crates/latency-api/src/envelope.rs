//! Response Assembler: resolve, wait, look up, wrap.
//!
//! Each call is independent and shares nothing with concurrent calls. The
//! wait is a `tokio::time::sleep`, never a blocking sleep.

use std::time::Duration;

use latency_types::{ApiEnvelope, TestDelay};
use tracing::{debug, info_span, Instrument};

use crate::delay;
use crate::fixtures;

/// Build the envelope for a request without waiting.
///
/// `raw_type` and `raw_delay` are echoed verbatim. The echoed `delay` is the
/// caller's token even when the actual wait was clamped or fell back.
pub fn assemble(raw_type: &str, raw_delay: &str) -> ApiEnvelope {
    ApiEnvelope {
        fixture_type: raw_type.to_owned(),
        delay: raw_delay.to_owned(),
        data: fixtures::lookup(raw_type),
    }
}

/// Serve one `/api/v1/{delay}/{type}` request.
///
/// Resolves the delay, suspends this request for exactly that long, then
/// assembles the envelope. Runs inside an `api.handler.v1` span.
pub async fn respond(raw_type: &str, raw_delay: &str) -> ApiEnvelope {
    let resolved_ms = delay::resolve_delay(raw_delay);
    let span = info_span!(
        "api.handler.v1",
        requested_type = raw_type,
        resolved_delay_ms = resolved_ms,
    );

    async move {
        tokio::time::sleep(Duration::from_millis(resolved_ms)).await;
        let envelope = assemble(raw_type, raw_delay);
        debug!(fixture_found = !envelope.data.is_empty(), "envelope assembled");
        envelope
    }
    .instrument(span)
    .await
}

/// Serve one `/api/test` request.
///
/// With no `ms` the wait is random in `0..2000`; otherwise `ms` goes through
/// the same resolver as the fixture endpoint. The body reports the delay
/// actually waited.
pub async fn respond_test(ms: Option<&str>) -> TestDelay {
    let delay_ms = ms.map_or_else(delay::random_test_delay, delay::resolve_delay);
    let span = info_span!("api.handler.test", delay_ms);

    async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        TestDelay::millis(delay_ms)
    }
    .instrument(span)
    .await
}
