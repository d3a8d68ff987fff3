//! Claims backend adapter
//!
//! Implements [`ClaimsBackendPort`] over the backend's REST API. Requests are
//! sent once; failures are reported to the session, which decides what the
//! user sees.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use domain_claims::{ClaimPayload, ClaimsBackendPort, DocumentTypeOption, LocationEntry};

use crate::client::create_client;
use crate::config::BackendConfig;
use crate::error::HttpAdapterError;

/// Document type list
pub const DOCUMENT_TYPES_PATH: &str = "/api/tipo-documento";
/// Flat location table
pub const LOCATIONS_PATH: &str = "/api/ubicaciones";
/// Claim submission
pub const CLAIMS_PATH: &str = "/api/reclamos";

/// REST adapter for the claims backend
#[derive(Debug, Clone)]
pub struct HttpClaimsBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpClaimsBackend {
    /// Creates an adapter for the configured backend
    pub fn new(config: BackendConfig) -> Result<Self, HttpAdapterError> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }

    /// Returns the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpAdapterError> {
        let response = self
            .client
            .get(self.config.endpoint(path))
            .send()
            .await
            .map_err(|err| self.transport_error("GET", path, err))?;

        let body = self.success_body("GET", path, response).await?;
        serde_json::from_str(&body).map_err(|err| HttpAdapterError::Decode {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, HttpAdapterError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|err| self.transport_error("POST", path, err))?;

        let text = self.success_body("POST", path, response).await?;
        // The response is only logged, so anything that is not JSON is kept as text.
        Ok(if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        })
    }

    async fn success_body(
        &self,
        method: &'static str,
        path: &str,
        response: Response,
    ) -> Result<String, HttpAdapterError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(method, path, err))?;

        debug!(method, path, %status, bytes = body.len(), "Backend responded");

        if status.is_success() {
            Ok(body)
        } else {
            Err(HttpAdapterError::Status {
                method,
                path: path.to_string(),
                status,
                body,
            })
        }
    }

    fn transport_error(&self, method: &'static str, path: &str, err: reqwest::Error) -> HttpAdapterError {
        if err.is_timeout() {
            HttpAdapterError::Timeout {
                method,
                path: path.to_string(),
                timeout_ms: self
                    .config
                    .request_timeout()
                    .map(|t| t.as_millis() as u64)
                    .unwrap_or_default(),
            }
        } else if err.is_decode() {
            HttpAdapterError::Decode {
                path: path.to_string(),
                message: err.to_string(),
            }
        } else {
            HttpAdapterError::Transport {
                method,
                path: path.to_string(),
                source: err,
            }
        }
    }
}

impl DomainPort for HttpClaimsBackend {}

#[async_trait]
impl ClaimsBackendPort for HttpClaimsBackend {
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn fetch_document_types(&self) -> Result<Vec<DocumentTypeOption>, PortError> {
        Ok(self.get_json(DOCUMENT_TYPES_PATH).await?)
    }

    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn fetch_locations(&self) -> Result<Vec<LocationEntry>, PortError> {
        Ok(self.get_json(LOCATIONS_PATH).await?)
    }

    #[instrument(skip(self, payload), fields(base_url = %self.config.base_url))]
    async fn submit_claim(&self, payload: &ClaimPayload) -> Result<serde_json::Value, PortError> {
        Ok(self.post_json(CLAIMS_PATH, payload).await?)
    }
}
