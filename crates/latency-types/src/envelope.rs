//! Response bodies returned by the latency endpoints.

use serde::{Deserialize, Serialize};

use crate::fixtures::FixtureData;

/// Unit string reported by `/api/test`.
pub const DELAY_UNIT: &str = "ms";

/// The uniform `{ type, delay, data }` response of `/api/v1/{delay}/{type}`.
///
/// `type` and `delay` echo the raw path segments exactly as the caller sent
/// them. In particular `delay` is the unclamped token, not the duration the
/// server actually waited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// The requested fixture tag, recognized or not.
    #[serde(rename = "type")]
    pub fixture_type: String,
    /// The raw delay token from the request path.
    pub delay: String,
    /// The fixture payload, `{}` for unrecognized tags.
    pub data: FixtureData,
}

/// Body of `/api/test`: the delay actually waited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDelay {
    /// Milliseconds waited before responding.
    pub delay: u64,
    /// Always [`DELAY_UNIT`].
    pub unit: String,
}

impl TestDelay {
    /// Build a body for a delay in milliseconds.
    pub fn millis(delay: u64) -> Self {
        Self {
            delay,
            unit: String::from(DELAY_UNIT),
        }
    }
}
