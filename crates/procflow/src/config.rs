//! Configuration for the procflow client

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};
use crate::{DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_MS};

/// Configuration for the procflow client.
///
/// Two knobs only: where the API lives and how long a single call may take.
/// Both are fixed once a [`Client`](crate::Client) has been built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root prefix prepended to every request path
    pub base_path: String,

    /// Deadline for a single call, connect to last body byte
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at `base_path` with the default timeout.
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// This will look for:
    /// - `PROCFLOW_BASE_PATH` for the API base path
    /// - `PROCFLOW_TIMEOUT_MS` for the per-call timeout (in milliseconds)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `PROCFLOW_TIMEOUT_MS` is set but
    /// is not a non-negative integer.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_path) = env::var("PROCFLOW_BASE_PATH") {
            config.base_path = base_path;
        }

        if let Ok(timeout_str) = env::var("PROCFLOW_TIMEOUT_MS") {
            let timeout_ms = timeout_str.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfig(format!(
                    "PROCFLOW_TIMEOUT_MS must be an integer number of milliseconds, got '{}': {}",
                    timeout_str, e
                ))
            })?;
            config.timeout = Duration::from_millis(timeout_ms);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        let defaults = ClientConfig::default();
        if other.base_path != defaults.base_path {
            self.base_path = other.base_path;
        }
        if other.timeout != defaults.timeout {
            self.timeout = other.timeout;
        }
        self
    }

    /// Parse and check the base path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base path is empty, unparsable, or
    /// not `http`/`https`.
    pub fn validated_base_url(&self) -> Result<Url> {
        let trimmed = self.base_path.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidUrl("Base path cannot be empty".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| Error::InvalidUrl(format!("Invalid base path '{}': {}", trimmed, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::InvalidUrl(format!(
                "Unsupported scheme '{}' in base path, expected http or https",
                other
            ))),
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the per-call timeout in milliseconds.
    pub fn timeout_millis(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_path, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfigBuilder::new()
            .base_path("https://flows.example.com/api")
            .timeout_millis(1500)
            .build();

        assert_eq!(config.base_path, "https://flows.example.com/api");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_config_merge() {
        let config1 = ClientConfig::with_base_path("https://one.example/api");
        let config2 = ClientConfigBuilder::new()
            .timeout(Duration::from_secs(2))
            .build();

        let merged = config1.merge(config2);
        assert_eq!(merged.base_path, "https://one.example/api");
        assert_eq!(merged.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_validated_base_url() {
        let url = ClientConfig::with_base_path("http://localhost:8080/api")
            .validated_base_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn test_validated_base_url_rejects_empty() {
        let result = ClientConfig::with_base_path("  ").validated_base_url();
        assert_matches!(result, Err(Error::InvalidUrl(msg)) if msg.contains("empty"));
    }

    #[test]
    fn test_validated_base_url_rejects_scheme() {
        let result = ClientConfig::with_base_path("ftp://files.example/api").validated_base_url();
        assert_matches!(result, Err(Error::InvalidUrl(msg)) if msg.contains("ftp"));
    }

    #[test]
    fn test_validated_base_url_rejects_relative() {
        let result = ClientConfig::with_base_path("/api").validated_base_url();
        assert_matches!(result, Err(Error::InvalidUrl(_)));
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_variables() {
        temp_env::with_vars(
            [
                ("PROCFLOW_BASE_PATH", Some("https://env.example/api")),
                ("PROCFLOW_TIMEOUT_MS", Some("750")),
            ],
            || {
                let config = ClientConfig::from_env().expect("Should load config from environment");
                assert_eq!(config.base_path, "https://env.example/api");
                assert_eq!(config.timeout, Duration::from_millis(750));
            },
        );
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_bad_timeout() {
        temp_env::with_vars(
            [
                ("PROCFLOW_BASE_PATH", None),
                ("PROCFLOW_TIMEOUT_MS", Some("soon")),
            ],
            || {
                let result = ClientConfig::from_env();
                assert_matches!(result, Err(Error::InvalidConfig(msg)) if msg.contains("soon"));
            },
        );
    }
}
