//! Test Data Builders
//!
//! Builder patterns for drafts and mock backends. Tests specify only the
//! fields they care about and take fixture defaults for everything else.

use domain_claims::ports::mock::MockClaimsBackend;
use domain_claims::{
    ClaimDraft, ClaimField, DocumentTypeOption, FormEvent, LocationEntry,
};

use crate::fixtures::{DocumentTypeFixtures, DraftFixtures, LocationFixtures};

/// Builder for claim drafts
pub struct ClaimDraftBuilder {
    draft: ClaimDraft,
}

impl Default for ClaimDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimDraftBuilder {
    /// Starts from a complete, valid draft
    pub fn new() -> Self {
        Self {
            draft: DraftFixtures::complete_miraflores(),
        }
    }

    /// Starts from the empty draft
    pub fn empty() -> Self {
        Self {
            draft: ClaimDraft::empty(),
        }
    }

    /// Sets the location triple
    pub fn located_at(mut self, department: &str, province: &str, district: &str) -> Self {
        self.draft.department = department.to_string();
        self.draft.province = province.to_string();
        self.draft.district = district.to_string();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = description.into();
        self
    }

    /// Sets the document type selector value
    pub fn with_document_type(mut self, id: impl Into<String>) -> Self {
        self.draft.document_type_id = id.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.draft.email = email.into();
        self
    }

    pub fn build(self) -> ClaimDraft {
        self.draft
    }

    /// The form events that reproduce this draft from an empty form
    ///
    /// Location fields come last, in cascade order.
    pub fn into_events(self) -> Vec<FormEvent> {
        let draft = self.draft;
        let mut events: Vec<FormEvent> = ClaimField::ALL
            .iter()
            .filter(|field| !field.is_location())
            .map(|field| FormEvent::edit(*field, draft.get(*field)))
            .collect();
        events.push(FormEvent::DepartmentChanged(draft.department));
        events.push(FormEvent::ProvinceChanged(draft.province));
        events.push(FormEvent::DistrictChanged(draft.district));
        events
    }
}

/// Builder for mock backends
pub struct MockBackendBuilder {
    document_types: Vec<DocumentTypeOption>,
    locations: Vec<LocationEntry>,
    fail_document_types: bool,
    fail_locations: bool,
    fail_submissions: bool,
}

impl Default for MockBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackendBuilder {
    /// Starts with the standard document types and the Lima/Cusco table
    pub fn new() -> Self {
        Self {
            document_types: DocumentTypeFixtures::standard(),
            locations: LocationFixtures::lima_cusco(),
            fail_document_types: false,
            fail_locations: false,
            fail_submissions: false,
        }
    }

    pub fn with_locations(mut self, locations: Vec<LocationEntry>) -> Self {
        self.locations = locations;
        self
    }

    pub fn failing_document_types(mut self) -> Self {
        self.fail_document_types = true;
        self
    }

    pub fn failing_locations(mut self) -> Self {
        self.fail_locations = true;
        self
    }

    pub fn failing_submissions(mut self) -> Self {
        self.fail_submissions = true;
        self
    }

    pub fn build(self) -> MockClaimsBackend {
        let backend = MockClaimsBackend::with_reference_data(self.document_types, self.locations);
        backend.fail_document_types(self.fail_document_types);
        backend.fail_locations(self.fail_locations);
        backend.fail_submissions(self.fail_submissions);
        backend
    }
}
