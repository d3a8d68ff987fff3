//! CLI configuration
//!
//! Settings come from `RECLAMOS_*` environment variables. A variable that
//! does not parse is an error: the CLI refuses to start rather than send a
//! claim to a default backend in a default validation mode.

use std::collections::HashMap;

use serde::Deserialize;

use domain_claims::SessionSettings;
use infra_http::config::{DEFAULT_BASE_URL, ENV_PREFIX};
use infra_http::BackendConfig;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Backend base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Refuse to send drafts that fail validation
    pub strict_validation: bool,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            strict_validation: true,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `RECLAMOS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit set of `RECLAMOS_*` variables
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Backend connection settings
    pub fn backend(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Session behaviour settings
    pub fn session(&self) -> SessionSettings {
        SessionSettings {
            strict_validation: self.strict_validation,
        }
    }
}
