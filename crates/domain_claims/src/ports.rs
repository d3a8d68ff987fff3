//! Backend port for the claim form
//!
//! The form needs exactly three things from its backend: the document type
//! list, the location table, and a place to post finished claims. Adapters
//! implement [`ClaimsBackendPort`]; the session only ever sees the trait.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::reference::{DocumentTypeOption, LocationEntry};
use crate::submission::ClaimPayload;

/// Operations the claim form requires from the claims backend
#[async_trait]
pub trait ClaimsBackendPort: DomainPort {
    /// Fetches the document types offered in the document type selector
    async fn fetch_document_types(&self) -> Result<Vec<DocumentTypeOption>, PortError>;

    /// Fetches the flat location table
    async fn fetch_locations(&self) -> Result<Vec<LocationEntry>, PortError>;

    /// Posts a claim and returns the backend's response body
    async fn submit_claim(&self, payload: &ClaimPayload) -> Result<serde_json::Value, PortError>;
}

/// Mock implementation of ClaimsBackendPort for testing
///
/// Serves fixed reference data from memory and records every submitted
/// payload. Each operation can be switched to fail independently.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of ClaimsBackendPort
    #[derive(Debug, Default)]
    pub struct MockClaimsBackend {
        document_types: Vec<DocumentTypeOption>,
        locations: Vec<LocationEntry>,
        fail_document_types: AtomicBool,
        fail_locations: AtomicBool,
        fail_submissions: AtomicBool,
        submissions: Arc<RwLock<Vec<ClaimPayload>>>,
    }

    impl MockClaimsBackend {
        /// Creates a mock with no reference data
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the reference data served by the mock
        pub fn with_reference_data(
            document_types: Vec<DocumentTypeOption>,
            locations: Vec<LocationEntry>,
        ) -> Self {
            Self {
                document_types,
                locations,
                ..Self::default()
            }
        }

        pub fn fail_document_types(&self, fail: bool) {
            self.fail_document_types.store(fail, Ordering::SeqCst);
        }

        pub fn fail_locations(&self, fail: bool) {
            self.fail_locations.store(fail, Ordering::SeqCst);
        }

        pub fn fail_submissions(&self, fail: bool) {
            self.fail_submissions.store(fail, Ordering::SeqCst);
        }

        /// Payloads accepted so far
        pub async fn submissions(&self) -> Vec<ClaimPayload> {
            self.submissions.read().await.clone()
        }
    }

    impl DomainPort for MockClaimsBackend {}

    #[async_trait]
    impl ClaimsBackendPort for MockClaimsBackend {
        async fn fetch_document_types(&self) -> Result<Vec<DocumentTypeOption>, PortError> {
            if self.fail_document_types.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock document types unavailable"));
            }
            Ok(self.document_types.clone())
        }

        async fn fetch_locations(&self) -> Result<Vec<LocationEntry>, PortError> {
            if self.fail_locations.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock locations unavailable"));
            }
            Ok(self.locations.clone())
        }

        async fn submit_claim(&self, payload: &ClaimPayload) -> Result<serde_json::Value, PortError> {
            if self.fail_submissions.load(Ordering::SeqCst) {
                return Err(PortError::ServiceUnavailable {
                    service: "mock claims backend".to_string(),
                });
            }
            let mut submissions = self.submissions.write().await;
            submissions.push(payload.clone());
            Ok(serde_json::json!({ "id": submissions.len() }))
        }
    }
}
