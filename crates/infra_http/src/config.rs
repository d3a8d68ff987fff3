//! Backend connection configuration

use serde::Deserialize;
use std::time::Duration;

/// Base URL the form talks to when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable prefix for backend settings
pub const ENV_PREFIX: &str = "RECLAMOS";

/// Configuration options for the claims backend client
///
/// # Example
///
/// ```rust
/// use infra_http::BackendConfig;
/// use std::time::Duration;
///
/// let config = BackendConfig::new("https://reclamos.example.pe")
///     .timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout_secs, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Scheme, host and port of the backend, without the `/api` prefix
    pub base_url: String,
    /// Per-request timeout; unset means wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    /// Creates a configuration for the given base URL with no timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Sets the per-request timeout
    ///
    /// Timeouts are kept in whole seconds; a fractional part rounds up, so a
    /// sub-second timeout becomes one second rather than zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = Some(secs);
        self
    }

    /// Returns the configured timeout, if any
    ///
    /// A zero timeout would fail every request immediately and is treated as
    /// unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Loads configuration from `RECLAMOS_*` environment variables
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let source = ::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::from_config(source)
    }

    /// Extracts the backend settings from an already assembled configuration
    pub fn from_config(source: ::config::Config) -> Result<Self, ::config::ConfigError> {
        source.try_deserialize()
    }

    /// Joins an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = BackendConfig::new("http://backend:9000/");
        assert_eq!(config.endpoint("/api/reclamos"), "http://backend:9000/api/reclamos");
    }

    #[test]
    fn test_from_config_overrides() {
        let source = ::config::Config::builder()
            .set_override("base_url", "http://reclamos.internal")
            .unwrap()
            .set_override("timeout_secs", 15)
            .unwrap()
            .build()
            .unwrap();

        let config = BackendConfig::from_config(source).unwrap();
        assert_eq!(config.base_url, "http://reclamos.internal");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_config_falls_back_to_defaults() {
        let source = ::config::Config::builder().build().unwrap();
        assert_eq!(BackendConfig::from_config(source).unwrap(), BackendConfig::default());
    }

    #[test]
    fn test_sub_second_timeout_rounds_up() {
        let config = BackendConfig::default().timeout(Duration::from_millis(500));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(1)));

        let config = BackendConfig::default().timeout(Duration::from_millis(2500));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_timeout_is_unset() {
        let config = BackendConfig {
            timeout_secs: Some(0),
            ..BackendConfig::default()
        };
        assert!(config.request_timeout().is_none());
        assert!(BackendConfig::default().timeout(Duration::ZERO).request_timeout().is_none());
    }
}
