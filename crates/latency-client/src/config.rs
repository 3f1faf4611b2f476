//! Client configuration.
//!
//! Loaded from environment variables, with defaults suitable for a local
//! `latency-server` and the public `PokeAPI`.

use std::time::Duration;

/// Default base URL of the latency API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default `PokeAPI` base URL.
pub const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Per-request timeout. Longer than the API's maximum delay.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`LatencyClient`](crate::LatencyClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the latency API, without a trailing slash.
    pub base_url: String,
    /// Base URL of `PokeAPI`, without a trailing slash.
    pub pokeapi_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config with explicit base URLs and the default timeout.
    ///
    /// Trailing slashes are stripped.
    pub fn new(base_url: impl Into<String>, pokeapi_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_slash(base_url.into()),
            pokeapi_url: trim_slash(pokeapi_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `API_BASE_URL` -- latency API base URL (default `http://localhost:3000`)
    /// - `POKEAPI_URL` -- `PokeAPI` base URL (default `https://pokeapi.co/api/v2`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            lookup("POKEAPI_URL").unwrap_or_else(|| DEFAULT_POKEAPI_URL.to_owned()),
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_POKEAPI_URL)
    }
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pokeapi_url, DEFAULT_POKEAPI_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn lookup_overrides_and_trims() {
        let config = ClientConfig::from_lookup(|key| match key {
            "API_BASE_URL" => Some(String::from("https://demo.example.com/")),
            "POKEAPI_URL" => Some(String::from("http://127.0.0.1:9000//")),
            _ => None,
        });
        assert_eq!(config.base_url, "https://demo.example.com");
        assert_eq!(config.pokeapi_url, "http://127.0.0.1:9000");
    }
}
