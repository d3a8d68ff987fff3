//! HTTP client construction

use reqwest::{Client, Url};
use tracing::info;

use crate::config::BackendConfig;
use crate::error::HttpAdapterError;

/// Builds the reqwest client for a backend configuration
///
/// The base URL is checked up front so a typo fails at startup rather than
/// on the first fetch.
pub fn create_client(config: &BackendConfig) -> Result<Client, HttpAdapterError> {
    let url = Url::parse(&config.base_url)
        .map_err(|err| HttpAdapterError::InvalidBaseUrl(format!("{}: {}", config.base_url, err)))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(HttpAdapterError::InvalidBaseUrl(format!(
            "{}: expected an http(s) URL with a host",
            config.base_url
        )));
    }

    info!(
        base_url = %config.base_url,
        timeout_secs = ?config.timeout_secs,
        "Creating claims backend client"
    );

    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(HttpAdapterError::ClientBuild)
}
