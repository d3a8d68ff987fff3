//! Claim validation rules
//!
//! These mirror the constraints the form markup enforces, plus the check
//! that the chosen location actually exists in the reference table.
//!
//! # Rules
//!
//! - Every required field is non-empty
//! - The document type selector holds the id of an offered document type
//! - The email is well formed
//! - The description is at most 1000 characters
//! - The incident date, when given, is a `YYYY-MM-DD` date
//! - The department, province and district resolve to a location row
//!
//! An incident date in the future is reported as a warning only.

use chrono::{NaiveDate, Utc};
use validator::{ValidateEmail, ValidateLength};

use core_kernel::DocumentTypeId;

use crate::draft::{ClaimDraft, ClaimField, MAX_DESCRIPTION_LENGTH};
use crate::reference::ReferenceData;

/// Date format of the incident date field
pub const INCIDENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of claim validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the draft may be submitted
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for claim drafts
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates a draft against the loaded reference data
    pub fn validate(draft: &ClaimDraft, reference: &ReferenceData) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_required(draft, &mut result);
        Self::validate_document_type(draft, reference, &mut result);
        Self::validate_contact(draft, &mut result);
        Self::validate_details(draft, &mut result);
        Self::validate_location(draft, reference, &mut result);

        result
    }

    fn validate_required(draft: &ClaimDraft, result: &mut ValidationResult) {
        for field in ClaimField::ALL.iter().filter(|f| f.is_required()) {
            if draft.get(*field).is_empty() {
                result.add_error(format!("{} is required", field));
            }
        }
    }

    fn validate_document_type(
        draft: &ClaimDraft,
        reference: &ReferenceData,
        result: &mut ValidationResult,
    ) {
        if draft.document_type_id.is_empty() {
            return;
        }
        match draft.document_type_id.parse::<DocumentTypeId>() {
            Ok(id) if reference.document_type(id).is_some() => {}
            Ok(id) => result.add_error(format!("Document type {} is not offered", id)),
            Err(err) => result.add_error(err.to_string()),
        }
    }

    fn validate_contact(draft: &ClaimDraft, result: &mut ValidationResult) {
        if !draft.email.is_empty() && !draft.email.validate_email() {
            result.add_error(format!("Invalid email format: {}", draft.email));
        }
    }

    fn validate_details(draft: &ClaimDraft, result: &mut ValidationResult) {
        if !draft
            .description
            .validate_length(None, Some(MAX_DESCRIPTION_LENGTH), None)
        {
            result.add_error(format!(
                "{} exceeds {} characters",
                ClaimField::Description,
                MAX_DESCRIPTION_LENGTH
            ));
        }

        if draft.incident_date.is_empty() {
            return;
        }
        match NaiveDate::parse_from_str(&draft.incident_date, INCIDENT_DATE_FORMAT) {
            Ok(date) if date > Utc::now().date_naive() => {
                result.add_warning(format!("Incident date {} is in the future", date));
            }
            Ok(_) => {}
            Err(_) => result.add_error(format!(
                "Invalid incident date: {} (expected YYYY-MM-DD)",
                draft.incident_date
            )),
        }
    }

    fn validate_location(draft: &ClaimDraft, reference: &ReferenceData, result: &mut ValidationResult) {
        // Empty components are already reported as required.
        if draft.department.is_empty() || draft.province.is_empty() || draft.district.is_empty() {
            return;
        }
        if reference
            .resolve_location(&draft.department, &draft.province, &draft.district)
            .is_none()
        {
            result.add_error(format!(
                "Location {} / {} / {} does not exist",
                draft.department, draft.province, draft.district
            ));
        }
    }
}
