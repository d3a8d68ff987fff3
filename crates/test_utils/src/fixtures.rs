//! Pre-built Test Fixtures
//!
//! Provides ready-to-use reference data and drafts. These fixtures are
//! consistent and predictable so tests can assert on exact ids.

use domain_claims::{ClaimDraft, DocumentTypeOption, LocationEntry, ReferenceData};

/// Fixture for location tables
pub struct LocationFixtures;

impl LocationFixtures {
    /// Two Lima districts and one Cusco district
    pub fn lima_cusco() -> Vec<LocationEntry> {
        vec![
            LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
            LocationEntry::new(2, "Lima", "Lima", "Surco"),
            LocationEntry::new(3, "Cusco", "Cusco", "Cusco"),
        ]
    }

    /// A larger table with several provinces per department
    pub fn peru_sample() -> Vec<LocationEntry> {
        vec![
            LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
            LocationEntry::new(2, "Lima", "Lima", "Surco"),
            LocationEntry::new(3, "Cusco", "Cusco", "Cusco"),
            LocationEntry::new(4, "Lima", "Huaura", "Huacho"),
            LocationEntry::new(5, "Lima", "Cañete", "San Vicente de Cañete"),
            LocationEntry::new(6, "Cusco", "Urubamba", "Ollantaytambo"),
            LocationEntry::new(7, "Arequipa", "Arequipa", "Yanahuara"),
            LocationEntry::new(8, "Cusco", "Cusco", "Wanchaq"),
        ]
    }

    /// Two rows that share a district name under the same province
    pub fn repeated_district() -> Vec<LocationEntry> {
        vec![
            LocationEntry::new(10, "Ancash", "Santa", "Chimbote"),
            LocationEntry::new(11, "Ancash", "Santa", "Chimbote"),
        ]
    }
}

/// Fixture for document types
pub struct DocumentTypeFixtures;

impl DocumentTypeFixtures {
    pub fn standard() -> Vec<DocumentTypeOption> {
        vec![
            DocumentTypeOption::new(1, "DNI"),
            DocumentTypeOption::new(2, "Carnet de Extranjería"),
            DocumentTypeOption::new(3, "Pasaporte"),
        ]
    }
}

/// Fixture for reference data snapshots
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    pub fn standard() -> ReferenceData {
        ReferenceData::new(DocumentTypeFixtures::standard(), LocationFixtures::lima_cusco())
    }
}

/// Fixture for claim drafts
pub struct DraftFixtures;

impl DraftFixtures {
    /// A draft that passes validation against [`ReferenceFixtures::standard`]
    pub fn complete_miraflores() -> ClaimDraft {
        ClaimDraft {
            document_type_id: "1".to_string(),
            document_number: "40123456".to_string(),
            last_name: "Torres Rojas".to_string(),
            first_name: "Luis".to_string(),
            department: "Lima".to_string(),
            province: "Lima".to_string(),
            district: "Miraflores".to_string(),
            address: "Av. Larco 123".to_string(),
            email: "luis.torres@example.pe".to_string(),
            phone: String::new(),
            mobile: "987654321".to_string(),
            incident_date: "2024-03-15".to_string(),
            official_name: String::new(),
            description: "Cobro indebido en la ventanilla 3".to_string(),
        }
    }
}
