//! HTTP client for the latency API.
//!
//! Wraps a single `reqwest::Client` so connections are pooled across
//! calls. Each call builds the request path from typed inputs and decodes
//! the typed response body.

use latency_types::{ApiEnvelope, FixtureType, TestDelay};
use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Shortest delay requested by [`LatencyClient::fetch_fixture`].
pub const MIN_FETCH_DELAY_MS: u64 = 750;

/// Longest delay requested by [`LatencyClient::fetch_fixture`].
pub const MAX_FETCH_DELAY_MS: u64 = 2000;

/// Pick a random delay for a demo fetch, uniform in `750..=2000`.
pub fn random_fetch_delay() -> u64 {
    rand::rng().random_range(MIN_FETCH_DELAY_MS..=MAX_FETCH_DELAY_MS)
}

/// Client for the latency API and `PokeAPI`.
#[derive(Debug, Clone)]
pub struct LatencyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl LatencyClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot
    /// be constructed (e.g. the TLS backend fails to initialize).
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a fixture with a random delay in `750..=2000` ms.
    ///
    /// # Errors
    ///
    /// See [`LatencyClient::fetch_fixture_with_delay`].
    pub async fn fetch_fixture(&self, fixture_type: FixtureType) -> Result<ApiEnvelope, ClientError> {
        self.fetch_fixture_with_delay(fixture_type, random_fetch_delay())
            .await
    }

    /// Fetch a fixture with an explicit delay.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure,
    /// [`ClientError::Status`] on a non-success status, or
    /// [`ClientError::Decode`] if the body is not an envelope.
    pub async fn fetch_fixture_with_delay(
        &self,
        fixture_type: FixtureType,
        delay_ms: u64,
    ) -> Result<ApiEnvelope, ClientError> {
        let url = self.fixture_url(fixture_type, delay_ms);
        debug!(%fixture_type, delay_ms, "fetching fixture");
        self.get_json(&url).await
    }

    /// Call `/api/test`, optionally with an explicit delay.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`LatencyClient::fetch_fixture_with_delay`].
    pub async fn fetch_test_delay(&self, ms: Option<u64>) -> Result<TestDelay, ClientError> {
        let url = ms.map_or_else(
            || format!("{}/api/test", self.config.base_url),
            |ms| format!("{}/api/test?ms={ms}", self.config.base_url),
        );
        self.get_json(&url).await
    }

    /// URL for `/api/v1/{delay}/{type}`.
    pub fn fixture_url(&self, fixture_type: FixtureType, delay_ms: u64) -> String {
        format!(
            "{}/api/v1/{delay_ms}/{fixture_type}",
            self.config.base_url
        )
    }

    /// GET a URL and decode a JSON body, mapping non-2xx to an error.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
