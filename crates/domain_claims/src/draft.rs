//! Claim draft
//!
//! The draft is the flat record bound to the form fields. Every field is kept
//! as entered; parsing into typed values happens only when the draft is
//! validated or turned into a payload.

use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Maximum number of characters accepted in a claim description
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// A form field of the claim draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    DocumentType,
    DocumentNumber,
    LastName,
    FirstName,
    Department,
    Province,
    District,
    Address,
    Email,
    Phone,
    Mobile,
    IncidentDate,
    OfficialName,
    Description,
}

impl ClaimField {
    /// Every field, in form order
    pub const ALL: [ClaimField; 14] = [
        ClaimField::DocumentType,
        ClaimField::DocumentNumber,
        ClaimField::LastName,
        ClaimField::FirstName,
        ClaimField::Department,
        ClaimField::Province,
        ClaimField::District,
        ClaimField::Address,
        ClaimField::Email,
        ClaimField::Phone,
        ClaimField::Mobile,
        ClaimField::IncidentDate,
        ClaimField::OfficialName,
        ClaimField::Description,
    ];

    /// The name the backend and the form use for this field
    pub fn form_name(&self) -> &'static str {
        match self {
            ClaimField::DocumentType => "tipoDocumento",
            ClaimField::DocumentNumber => "numeroDocumento",
            ClaimField::LastName => "apellidos",
            ClaimField::FirstName => "nombres",
            ClaimField::Department => "departamento",
            ClaimField::Province => "provincia",
            ClaimField::District => "distrito",
            ClaimField::Address => "domicilio",
            ClaimField::Email => "correo",
            ClaimField::Phone => "telefono",
            ClaimField::Mobile => "celular",
            ClaimField::IncidentDate => "fechaHecho",
            ClaimField::OfficialName => "funcionario",
            ClaimField::Description => "descripcion",
        }
    }

    /// True for the three cascading location fields
    pub fn is_location(&self) -> bool {
        matches!(
            self,
            ClaimField::Department | ClaimField::Province | ClaimField::District
        )
    }

    /// True when the form refuses to submit with this field blank
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            ClaimField::Phone
                | ClaimField::Mobile
                | ClaimField::IncidentDate
                | ClaimField::OfficialName
        )
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

impl FromStr for ClaimField {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimField::ALL
            .iter()
            .copied()
            .find(|field| field.form_name() == s)
            .ok_or_else(|| ClaimError::UnknownField(s.to_string()))
    }
}

/// The claim being edited
///
/// Empty strings mean "not filled in". `document_type_id` holds the selector
/// value, which is the document type's id rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimDraft {
    pub document_type_id: String,
    pub document_number: String,
    pub last_name: String,
    pub first_name: String,
    pub department: String,
    pub province: String,
    pub district: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub incident_date: String,
    pub official_name: String,
    pub description: String,
}

impl ClaimDraft {
    /// Creates the empty draft shown when the form first loads
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the current value of a field
    pub fn get(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::DocumentType => &self.document_type_id,
            ClaimField::DocumentNumber => &self.document_number,
            ClaimField::LastName => &self.last_name,
            ClaimField::FirstName => &self.first_name,
            ClaimField::Department => &self.department,
            ClaimField::Province => &self.province,
            ClaimField::District => &self.district,
            ClaimField::Address => &self.address,
            ClaimField::Email => &self.email,
            ClaimField::Phone => &self.phone,
            ClaimField::Mobile => &self.mobile,
            ClaimField::IncidentDate => &self.incident_date,
            ClaimField::OfficialName => &self.official_name,
            ClaimField::Description => &self.description,
        }
    }

    /// Overwrites a single field without any cascading
    ///
    /// Location fields should go through the form reducer instead, which
    /// clears the dependent fields.
    pub(crate) fn set(&mut self, field: ClaimField, value: String) {
        let slot = match field {
            ClaimField::DocumentType => &mut self.document_type_id,
            ClaimField::DocumentNumber => &mut self.document_number,
            ClaimField::LastName => &mut self.last_name,
            ClaimField::FirstName => &mut self.first_name,
            ClaimField::Department => &mut self.department,
            ClaimField::Province => &mut self.province,
            ClaimField::District => &mut self.district,
            ClaimField::Address => &mut self.address,
            ClaimField::Email => &mut self.email,
            ClaimField::Phone => &mut self.phone,
            ClaimField::Mobile => &mut self.mobile,
            ClaimField::IncidentDate => &mut self.incident_date,
            ClaimField::OfficialName => &mut self.official_name,
            ClaimField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// True when no field has been filled in
    pub fn is_empty(&self) -> bool {
        ClaimField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
