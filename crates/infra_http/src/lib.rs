//! Infrastructure HTTP Layer
//!
//! This crate connects the claim form to its REST backend using reqwest.
//!
//! # Endpoints
//!
//! | Operation              | Request                    |
//! |------------------------|----------------------------|
//! | document types         | `GET /api/tipo-documento`  |
//! | location table         | `GET /api/ubicaciones`     |
//! | claim submission       | `POST /api/reclamos`       |
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_http::{BackendConfig, HttpClaimsBackend};
//! use domain_claims::{ClaimFormSession, SessionSettings};
//!
//! let backend = HttpClaimsBackend::new(BackendConfig::from_env()?)?;
//! let mut session = ClaimFormSession::new(backend, SessionSettings::default());
//! session.load_reference_data().await;
//! ```

pub mod config;
pub mod client;
pub mod error;
pub mod backend;

pub use config::BackendConfig;
pub use client::create_client;
pub use error::HttpAdapterError;
pub use backend::{HttpClaimsBackend, CLAIMS_PATH, DOCUMENT_TYPES_PATH, LOCATIONS_PATH};
