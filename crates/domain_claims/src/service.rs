//! Claim form session
//!
//! Ties the pieces together for one page view: reference data is loaded once,
//! user events are reduced into the form state, and submissions go through
//! the backend port.
//!
//! Every mutating method takes `&mut self`, so event handling is serialized:
//! a submit runs to completion, network call included, before the next edit
//! is applied.

use core_kernel::PortError;

use crate::cascade::CascadeOptions;
use crate::draft::ClaimDraft;
use crate::form::{FormEvent, FormState};
use crate::ports::ClaimsBackendPort;
use crate::reference::ReferenceData;
use crate::submission::{ClaimPayload, SubmissionNotice, SubmissionOutcome};
use crate::validation::ClaimValidator;

/// Session behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Validate the draft before posting and refuse to send invalid claims
    pub strict_validation: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            strict_validation: true,
        }
    }
}

/// Load result for one reference collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not requested yet
    Pending,
    /// Loaded with this many rows
    Loaded(usize),
    /// The fetch failed; the collection is empty
    Failed(String),
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded(_))
    }
}

/// Outcome of loading both reference collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub document_types: LoadStatus,
    pub locations: LoadStatus,
}

impl LoadReport {
    fn pending() -> Self {
        Self {
            document_types: LoadStatus::Pending,
            locations: LoadStatus::Pending,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.document_types.is_loaded() && self.locations.is_loaded()
    }
}

/// A single claim form over a backend port
pub struct ClaimFormSession<P> {
    port: P,
    settings: SessionSettings,
    reference: ReferenceData,
    state: FormState,
    load_report: LoadReport,
    last_notice: Option<SubmissionNotice>,
}

impl<P: ClaimsBackendPort> ClaimFormSession<P> {
    /// Creates a session with empty reference data and an empty draft
    pub fn new(port: P, settings: SessionSettings) -> Self {
        Self {
            port,
            settings,
            reference: ReferenceData::empty(),
            state: FormState::new(),
            load_report: LoadReport::pending(),
            last_notice: None,
        }
    }

    /// Loads document types and locations
    ///
    /// Both fetches run concurrently and are never retried. A failed fetch is
    /// logged and leaves its collection empty. Data is loaded once; later
    /// calls return the first report without touching the backend.
    pub async fn load_reference_data(&mut self) -> LoadReport {
        if self.load_report != LoadReport::pending() {
            tracing::debug!("Reference data already loaded for this session");
            return self.load_report.clone();
        }

        let (document_types, locations) = tokio::join!(
            self.port.fetch_document_types(),
            self.port.fetch_locations()
        );

        let (document_types, document_types_status) =
            settle("document types", document_types);
        let (locations, locations_status) = settle("locations", locations);

        tracing::info!(
            document_types = document_types.len(),
            locations = locations.len(),
            "Reference data loaded"
        );

        self.reference = ReferenceData::new(document_types, locations);
        self.load_report = LoadReport {
            document_types: document_types_status,
            locations: locations_status,
        };
        self.load_report.clone()
    }

    /// Applies a user edit
    pub fn apply(&mut self, event: FormEvent) {
        tracing::trace!(?event, "Applying form event");
        self.state.apply(event);
    }

    /// Validates, posts, and settles the current draft
    ///
    /// On success the draft and both selections return to empty. On any
    /// failure the state is left exactly as it was.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let outcome = self.try_submit().await;

        match &outcome {
            SubmissionOutcome::Submitted { response } => {
                tracing::info!(%response, "Claim submitted");
                self.state = FormState::new();
            }
            SubmissionOutcome::Rejected { validation } => {
                tracing::warn!(errors = ?validation.errors, "Claim rejected by validation");
            }
            SubmissionOutcome::Failed { error } => {
                tracing::error!(%error, "Claim submission failed");
            }
        }

        self.last_notice = Some(outcome.notice());
        outcome
    }

    async fn try_submit(&self) -> SubmissionOutcome {
        if self.settings.strict_validation {
            let validation = ClaimValidator::validate(&self.state.draft, &self.reference);
            if !validation.is_valid {
                return SubmissionOutcome::Rejected { validation };
            }
        }

        let payload = ClaimPayload::from_draft(&self.state.draft, &self.reference);
        match self.port.submit_claim(&payload).await {
            Ok(response) => SubmissionOutcome::Submitted { response },
            Err(error) => SubmissionOutcome::Failed { error },
        }
    }

    /// Selector options for the current selection
    pub fn options(&self) -> CascadeOptions<'_> {
        self.state.options(&self.reference)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ClaimDraft {
        &self.state.draft
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// The notice from the most recent submit, if any
    pub fn last_notice(&self) -> Option<&SubmissionNotice> {
        self.last_notice.as_ref()
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

fn settle<T>(collection: &str, result: Result<Vec<T>, PortError>) -> (Vec<T>, LoadStatus) {
    match result {
        Ok(rows) => {
            let status = LoadStatus::Loaded(rows.len());
            (rows, status)
        }
        Err(error) => {
            tracing::error!(%error, collection, "Failed to load reference data");
            (Vec::new(), LoadStatus::Failed(error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ClaimField;
    use crate::ports::mock::MockClaimsBackend;
    use crate::reference::{DocumentTypeOption, LocationEntry};
    use core_kernel::LocationId;

    fn backend() -> MockClaimsBackend {
        MockClaimsBackend::with_reference_data(
            vec![
                DocumentTypeOption::new(1, "DNI"),
                DocumentTypeOption::new(2, "Pasaporte"),
            ],
            vec![
                LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
                LocationEntry::new(2, "Lima", "Lima", "Surco"),
                LocationEntry::new(3, "Cusco", "Cusco", "Cusco"),
            ],
        )
    }

    fn fill(session: &mut ClaimFormSession<MockClaimsBackend>) {
        let fields = [
            (ClaimField::DocumentType, "1"),
            (ClaimField::DocumentNumber, "40123456"),
            (ClaimField::LastName, "Torres"),
            (ClaimField::FirstName, "Luis"),
            (ClaimField::Address, "Jr. Cusco 120"),
            (ClaimField::Email, "luis.torres@example.pe"),
            (ClaimField::Description, "Cobro indebido"),
        ];
        for (field, value) in fields {
            session.apply(FormEvent::edit(field, value));
        }
        session.apply(FormEvent::DepartmentChanged("Lima".into()));
        session.apply(FormEvent::ProvinceChanged("Lima".into()));
        session.apply(FormEvent::DistrictChanged("Miraflores".into()));
    }

    #[tokio::test]
    async fn test_load_reference_data() {
        let mut session = ClaimFormSession::new(backend(), SessionSettings::default());
        let report = session.load_reference_data().await;

        assert_eq!(report.document_types, LoadStatus::Loaded(2));
        assert_eq!(report.locations, LoadStatus::Loaded(3));
        assert!(report.is_complete());
        assert_eq!(session.options().departments, vec!["Lima", "Cusco"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_collection_empty() {
        let port = backend();
        port.fail_locations(true);
        let mut session = ClaimFormSession::new(port, SessionSettings::default());

        let report = session.load_reference_data().await;
        assert!(matches!(report.locations, LoadStatus::Failed(_)));
        assert_eq!(report.document_types, LoadStatus::Loaded(2));
        assert!(session.reference().locations().is_empty());
        assert_eq!(session.reference().document_types().len(), 2);
    }

    #[tokio::test]
    async fn test_reference_data_loads_once() {
        let mut session = ClaimFormSession::new(backend(), SessionSettings::default());
        session.load_reference_data().await;

        session.port().fail_document_types(true);
        let report = session.load_reference_data().await;
        assert_eq!(report.document_types, LoadStatus::Loaded(2));
    }

    #[tokio::test]
    async fn test_successful_submit_resets_state() {
        let mut session = ClaimFormSession::new(backend(), SessionSettings::default());
        session.load_reference_data().await;
        fill(&mut session);

        let outcome = session.submit().await;
        assert!(outcome.is_success(), "{:?}", outcome);
        assert!(session.state().is_pristine());
        assert!(session.last_notice().unwrap().is_success());

        let sent = session.port().submissions().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].location.id, Some(LocationId::new(1)));
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_state() {
        let mut session = ClaimFormSession::new(backend(), SessionSettings::default());
        session.load_reference_data().await;
        fill(&mut session);
        let before = session.state().clone();

        session.port().fail_submissions(true);
        let outcome = session.submit().await;

        assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
        assert_eq!(session.state(), &before);
        assert!(!session.last_notice().unwrap().is_success());
    }

    #[tokio::test]
    async fn test_strict_mode_blocks_unresolved_location() {
        let mut session = ClaimFormSession::new(backend(), SessionSettings::default());
        session.load_reference_data().await;
        fill(&mut session);
        session.apply(FormEvent::DistrictChanged("Barranco".into()));
        let before = session.state().clone();

        let outcome = session.submit().await;
        assert!(matches!(outcome, SubmissionOutcome::Rejected { .. }));
        assert_eq!(session.state(), &before);
        assert!(session.port().submissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_permissive_mode_sends_missing_location() {
        let settings = SessionSettings {
            strict_validation: false,
        };
        let mut session = ClaimFormSession::new(backend(), settings);
        session.load_reference_data().await;
        fill(&mut session);
        session.apply(FormEvent::DistrictChanged("Barranco".into()));

        let outcome = session.submit().await;
        assert!(outcome.is_success());
        let sent = session.port().submissions().await;
        assert_eq!(sent[0].location.id, None);
    }
}
