//! Ports and Adapters Infrastructure
//!
//! The claim form talks to its backend only through port traits defined in
//! the domain crate. Adapters (the HTTP client, the in-memory mock) implement
//! those traits and report failures with the unified [`PortError`].
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   ClaimFormSession (domain)  │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │   ClaimsBackendPort (trait)  │
//! └──────────────────────────────┘
//!          ▲              ▲
//!  ┌───────┴──────┐ ┌─────┴───────┐
//!  │ HTTP adapter │ │ Mock adapter │
//!  └──────────────┘ └──────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// so the session handles a failed fetch the same way whichever adapter
/// produced it.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested resource was not found
    #[error("Not found: {entity_type} at {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The backend rejected the request body
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Connection to the backend failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// The backend answered with a server error
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The response body could not be decoded
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed later
    ///
    /// Nothing in the form retries automatically; the submission notice uses
    /// this to tell the user a later attempt may go through.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across tasks.
pub trait DomainPort: Send + Sync + 'static {}
