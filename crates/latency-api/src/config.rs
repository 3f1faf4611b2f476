//! Configuration loading and typed config structures for the latency API.
//!
//! The canonical configuration lives in `latency-config.yaml` at the project
//! root. Every field has a default, so an empty or missing file is valid.
//!
//! Environment variables override file values after parsing:
//! - `LATENCY_HOST` overrides `server.host`
//! - `LATENCY_PORT` overrides `server.port` (ignored if not a valid port)
//! - `LOG_FORMAT=json` forces `logging.json`

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::server::ServerConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `latency-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("LATENCY_HOST") {
            self.server.host = host;
        }
        if let Some(raw) = lookup("LATENCY_PORT") {
            match raw.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid LATENCY_PORT"),
            }
        }
        if lookup("LOG_FORMAT").is_some_and(|format| format.eq_ignore_ascii_case("json")) {
            self.logging.json = true;
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit newline-delimited JSON instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8088
  service_name: "demo-latency"

logging:
  level: "debug"
  json: true
"#;
        let config = ServiceConfig::parse(yaml).unwrap_or_default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.service_name, "demo-latency");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = ServiceConfig::parse("server:\n  port: 7\n").unwrap_or_default();
        assert_eq!(config.server.port, 7);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(ServiceConfig::parse("").is_ok());
        assert!(ServiceConfig::parse("  \n").is_ok());
    }

    #[test]
    fn parse_invalid_yaml_is_an_error() {
        let result = ServiceConfig::parse("server:\n  port: not-a-port\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = ServiceConfig::default();
        config.apply_overrides(lookup_from(&[
            ("LATENCY_HOST", "127.0.0.1"),
            ("LATENCY_PORT", "9090"),
            ("LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert!(config.logging.json);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let mut config = ServiceConfig::default();
        config.apply_overrides(lookup_from(&[("LATENCY_PORT", "99999")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ServiceConfig::from_file(Path::new("does-not-exist.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("latency-config.yaml");
        let contents = std::fs::read_to_string(path).unwrap_or_default();
        let config = ServiceConfig::parse(&contents);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.service_name, "latency-api");
    }
}
