//! Reference data
//!
//! Document types and locations are read-only lookup tables owned by the
//! backend. They are fetched once per session and kept in an immutable
//! [`ReferenceData`] snapshot that the cascade filters and the submission
//! resolver borrow from.

use serde::{Deserialize, Serialize};

use core_kernel::{DocumentTypeId, LocationId};

/// A document type the claimant can identify with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeOption {
    pub id: DocumentTypeId,
    #[serde(rename = "nombre")]
    pub display_name: String,
}

impl DocumentTypeOption {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id: DocumentTypeId::new(id),
            display_name: display_name.into(),
        }
    }
}

/// One row of the flat location table
///
/// Each row is a valid (department, province, district) combination. The
/// table has no separate hierarchy; provinces and districts are found by
/// filtering rows on equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub id: LocationId,
    #[serde(rename = "departamento")]
    pub department: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "distrito")]
    pub district: String,
}

impl LocationEntry {
    pub fn new(
        id: i64,
        department: impl Into<String>,
        province: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        Self {
            id: LocationId::new(id),
            department: department.into(),
            province: province.into(),
            district: district.into(),
        }
    }

    /// Exact match on all three location components
    pub fn matches(&self, department: &str, province: &str, district: &str) -> bool {
        self.department == department && self.province == province && self.district == district
    }
}

/// Immutable snapshot of the backend's lookup tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    document_types: Vec<DocumentTypeOption>,
    locations: Vec<LocationEntry>,
}

impl ReferenceData {
    pub fn new(document_types: Vec<DocumentTypeOption>, locations: Vec<LocationEntry>) -> Self {
        Self {
            document_types,
            locations,
        }
    }

    /// The snapshot before anything has loaded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn document_types(&self) -> &[DocumentTypeOption] {
        &self.document_types
    }

    pub fn locations(&self) -> &[LocationEntry] {
        &self.locations
    }

    /// Looks up a document type by id
    pub fn document_type(&self, id: DocumentTypeId) -> Option<&DocumentTypeOption> {
        self.document_types.iter().find(|option| option.id == id)
    }

    /// Resolves a chosen triple back to its location row
    ///
    /// Returns the first row that matches all three components exactly.
    pub fn resolve_location(
        &self,
        department: &str,
        province: &str,
        district: &str,
    ) -> Option<&LocationEntry> {
        self.locations
            .iter()
            .find(|entry| entry.matches(department, province, district))
    }

    /// True when neither table has any rows
    pub fn is_empty(&self) -> bool {
        self.document_types.is_empty() && self.locations.is_empty()
    }
}
