//! Claim submission payload and outcomes
//!
//! The backend expects the draft's scalar fields plus two references by id:
//! `tipoDocumento` for the document type and `ubicacion` for the location
//! row matching the chosen department, province and district.

use serde::{Deserialize, Serialize};

use core_kernel::{DocumentTypeId, LocationId, PortError};

use crate::draft::ClaimDraft;
use crate::reference::ReferenceData;
use crate::validation::ValidationResult;

/// Notice shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Reclamo enviado correctamente.";
/// Notice shown after a failed submission
pub const FAILURE_MESSAGE: &str = "Hubo un error al enviar el reclamo.";
/// Extra detail when the backend could not be reached or timed out
pub const RETRY_HINT: &str = "El servicio no está disponible en este momento; puede intentarlo nuevamente.";

/// Reference to a document type by id
///
/// A missing id serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentTypeId>,
}

/// Reference to a location row by id
///
/// A missing id serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LocationId>,
}

/// Body of `POST /api/reclamos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayload {
    #[serde(rename = "tipoDocumento")]
    pub document_type: DocumentTypeRef,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "nombres")]
    pub first_name: String,
    #[serde(rename = "departamento")]
    pub department: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "distrito")]
    pub district: String,
    #[serde(rename = "domicilio")]
    pub address: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "celular")]
    pub mobile: String,
    #[serde(rename = "fechaHecho")]
    pub incident_date: String,
    #[serde(rename = "funcionario")]
    pub official_name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "ubicacion")]
    pub location: LocationRef,
}

impl ClaimPayload {
    /// Assembles the payload for a draft
    ///
    /// The location reference carries the id of the first row matching the
    /// draft's triple exactly. When nothing matches, or the document type
    /// selector holds no numeric id, the corresponding reference is sent
    /// without an id and the backend decides what to do with it.
    pub fn from_draft(draft: &ClaimDraft, reference: &ReferenceData) -> Self {
        let location = reference
            .resolve_location(&draft.department, &draft.province, &draft.district)
            .map(|entry| entry.id);

        if location.is_none() {
            tracing::warn!(
                department = %draft.department,
                province = %draft.province,
                district = %draft.district,
                "No location row matches the selected triple"
            );
        }

        Self {
            document_type: DocumentTypeRef {
                id: draft.document_type_id.parse().ok(),
            },
            document_number: draft.document_number.clone(),
            last_name: draft.last_name.clone(),
            first_name: draft.first_name.clone(),
            department: draft.department.clone(),
            province: draft.province.clone(),
            district: draft.district.clone(),
            address: draft.address.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            mobile: draft.mobile.clone(),
            incident_date: draft.incident_date.clone(),
            official_name: draft.official_name.clone(),
            description: draft.description.clone(),
            location: LocationRef { id: location },
        }
    }
}

/// User-visible acknowledgement of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionNotice {
    Success { message: String },
    Failure { message: String, details: Vec<String> },
}

impl SubmissionNotice {
    pub fn success() -> Self {
        SubmissionNotice::Success {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(details: Vec<String>) -> Self {
        SubmissionNotice::Failure {
            message: FAILURE_MESSAGE.to_string(),
            details,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionNotice::Success { message } | SubmissionNotice::Failure { message, .. } => {
                message
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionNotice::Success { .. })
    }
}

/// What happened when the form was submitted
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The backend accepted the claim
    Submitted { response: serde_json::Value },
    /// The draft failed validation and was not sent
    Rejected { validation: ValidationResult },
    /// The backend call failed
    Failed { error: PortError },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted { .. })
    }

    /// The notice to show the user
    pub fn notice(&self) -> SubmissionNotice {
        match self {
            SubmissionOutcome::Submitted { .. } => SubmissionNotice::success(),
            SubmissionOutcome::Rejected { validation } => {
                SubmissionNotice::failure(validation.errors.clone())
            }
            SubmissionOutcome::Failed { error } => {
                let mut details = vec![error.to_string()];
                if error.is_transient() {
                    details.push(RETRY_HINT.to_string());
                }
                SubmissionNotice::failure(details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::LocationEntry;
    use serde_json::json;

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![],
            vec![
                LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
                LocationEntry::new(2, "Lima", "Lima", "Surco"),
            ],
        )
    }

    #[test]
    fn test_payload_wire_shape() {
        let draft = ClaimDraft {
            document_type_id: "1".into(),
            department: "Lima".into(),
            province: "Lima".into(),
            district: "Surco".into(),
            description: "Demora en la atención".into(),
            ..ClaimDraft::empty()
        };

        let value = serde_json::to_value(ClaimPayload::from_draft(&draft, &reference())).unwrap();
        assert_eq!(value["tipoDocumento"], json!({"id": 1}));
        assert_eq!(value["ubicacion"], json!({"id": 2}));
        assert_eq!(value["distrito"], json!("Surco"));
        assert_eq!(value["telefono"], json!(""));
        assert_eq!(value["descripcion"], json!("Demora en la atención"));
    }

    #[test]
    fn test_unmatched_location_has_no_id() {
        let draft = ClaimDraft {
            department: "Lima".into(),
            province: "Lima".into(),
            district: "Barranco".into(),
            ..ClaimDraft::empty()
        };

        let payload = ClaimPayload::from_draft(&draft, &reference());
        assert_eq!(payload.location.id, None);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["ubicacion"], json!({}));
    }

    #[test]
    fn test_non_numeric_document_type_has_no_id() {
        let payload = ClaimPayload::from_draft(&ClaimDraft::empty(), &reference());
        assert_eq!(payload.document_type, DocumentTypeRef::default());
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(SubmissionNotice::success().message(), SUCCESS_MESSAGE);
        let failure = SubmissionNotice::failure(vec!["timeout".into()]);
        assert_eq!(failure.message(), FAILURE_MESSAGE);
        assert!(!failure.is_success());
    }

    #[test]
    fn test_transient_failure_suggests_retry() {
        let outcome = SubmissionOutcome::Failed {
            error: PortError::connection("connection refused"),
        };
        match outcome.notice() {
            SubmissionNotice::Failure { details, .. } => {
                assert_eq!(details, vec!["Connection error: connection refused", RETRY_HINT]);
            }
            other => panic!("Expected failure notice, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_request_has_no_retry_hint() {
        let outcome = SubmissionOutcome::Failed {
            error: PortError::validation("descripcion too long"),
        };
        match outcome.notice() {
            SubmissionNotice::Failure { details, .. } => {
                assert_eq!(details, vec!["Validation error: descripcion too long"]);
            }
            other => panic!("Expected failure notice, got {other:?}"),
        }
    }
}
