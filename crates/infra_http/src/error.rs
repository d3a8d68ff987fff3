//! HTTP adapter error types
//!
//! Transport and status failures are captured as [`HttpAdapterError`] and
//! then mapped onto the port-level [`PortError`] the domain understands:
//!
//! - 404 -> `PortError::NotFound`
//! - 401/403 -> `PortError::Unauthorized`
//! - 400/422 -> `PortError::Validation`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - timeouts -> `PortError::Timeout`
//! - connection failures -> `PortError::Connection`
//! - undecodable bodies -> `PortError::Transformation`

use reqwest::StatusCode;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while talking to the claims backend
#[derive(Debug, Error)]
pub enum HttpAdapterError {
    /// The configured base URL is unusable
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The reqwest client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{method} {path} returned {status}")]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
        body: String,
    },

    /// The request did not complete within the configured timeout
    #[error("{method} {path} timed out")]
    Timeout {
        method: &'static str,
        path: String,
        timeout_ms: u64,
    },

    /// The request never reached the backend or the connection dropped
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON
    #[error("Could not decode response of {path}: {message}")]
    Decode { path: String, message: String },
}

impl From<HttpAdapterError> for PortError {
    fn from(error: HttpAdapterError) -> Self {
        match error {
            HttpAdapterError::Status {
                method,
                path,
                status,
                body,
            } => match status {
                StatusCode::NOT_FOUND => PortError::not_found("endpoint", format!("{method} {path}")),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized {
                    message: format!("{method} {path} returned {status}"),
                },
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    PortError::validation(if body.is_empty() {
                        format!("{method} {path} returned {status}")
                    } else {
                        body
                    })
                }
                status if status.is_server_error() => PortError::ServiceUnavailable {
                    service: format!("{method} {path} returned {status}"),
                },
                status => PortError::internal(format!("{method} {path} returned {status}")),
            },
            HttpAdapterError::Timeout {
                method,
                path,
                timeout_ms,
            } => PortError::Timeout {
                operation: format!("{method} {path}"),
                duration_ms: timeout_ms,
            },
            HttpAdapterError::Transport { .. } => PortError::Connection {
                message: error.to_string(),
                source: Some(Box::new(error)),
            },
            HttpAdapterError::Decode { .. } => PortError::transformation(error.to_string()),
            HttpAdapterError::InvalidBaseUrl(_) | HttpAdapterError::ClientBuild(_) => {
                PortError::Internal {
                    message: error.to_string(),
                    source: Some(Box::new(error)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: StatusCode, body: &str) -> PortError {
        HttpAdapterError::Status {
            method: "POST",
            path: "/api/reclamos".to_string(),
            status: code,
            body: body.to_string(),
        }
        .into()
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status(StatusCode::NOT_FOUND, ""), PortError::NotFound { .. }));
        assert!(matches!(status(StatusCode::FORBIDDEN, ""), PortError::Unauthorized { .. }));
        assert!(matches!(
            status(StatusCode::BAD_GATEWAY, ""),
            PortError::ServiceUnavailable { .. }
        ));
        assert!(matches!(status(StatusCode::CONFLICT, ""), PortError::Internal { .. }));
    }

    #[test]
    fn test_bad_request_keeps_backend_message() {
        match status(StatusCode::BAD_REQUEST, "ubicacion es obligatoria") {
            PortError::Validation { message, .. } => assert_eq!(message, "ubicacion es obligatoria"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_timeout_mapping() {
        let err: PortError = HttpAdapterError::Timeout {
            method: "GET",
            path: "/api/ubicaciones".to_string(),
            timeout_ms: 2000,
        }
        .into();
        assert!(matches!(err, PortError::Timeout { duration_ms: 2000, .. }));
    }
}
