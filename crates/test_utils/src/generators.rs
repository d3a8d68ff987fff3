//! Property-Based Test Generators
//!
//! Provides proptest strategies for location tables and form events drawn
//! from those tables, plus faker-backed drafts for smoke tests.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use proptest::prelude::*;

use domain_claims::{ClaimDraft, FormEvent, LocationEntry};

use crate::fixtures::LocationFixtures;

/// Strategy for small location tables over a narrow name alphabet
///
/// Names collide often, which exercises the deduplication paths.
pub fn location_table_strategy() -> impl Strategy<Value = Vec<LocationEntry>> {
    let name = prop::sample::select(vec!["Lima", "Cusco", "Piura", "Junín"]);
    prop::collection::vec((name.clone(), name.clone(), name), 0..32).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (department, province, district))| {
                LocationEntry::new(i as i64 + 1, department, province, district)
            })
            .collect()
    })
}

/// Strategy for a selection value: mostly known names, sometimes blank or unknown
pub fn selection_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "Lima", "Cusco", "Piura", "Junín", "Tacna"]).prop_map(String::from)
}

/// Strategy for a location selector event
pub fn location_event_strategy() -> impl Strategy<Value = FormEvent> {
    prop_oneof![
        selection_strategy().prop_map(FormEvent::DepartmentChanged),
        selection_strategy().prop_map(FormEvent::ProvinceChanged),
        selection_strategy().prop_map(FormEvent::DistrictChanged),
    ]
}

/// Strategy for option positions a user clicks: (department, province)
///
/// Callers reduce each position modulo the number of offered options, so the
/// resulting events only ever pick values the selectors actually show.
pub fn offered_choice_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..8, 0usize..3)
}

/// A complete draft with faker-generated personal data
pub fn fake_draft() -> ClaimDraft {
    let location = &LocationFixtures::lima_cusco()[0];
    ClaimDraft {
        document_type_id: "1".to_string(),
        document_number: format!("{:08}", (10_000_000u32..99_999_999u32).fake::<u32>()),
        last_name: LastName().fake(),
        first_name: FirstName().fake(),
        department: location.department.clone(),
        province: location.province.clone(),
        district: location.district.clone(),
        address: format!("Calle {} {}", LastName().fake::<String>(), (1u16..999u16).fake::<u16>()),
        email: SafeEmail().fake(),
        description: "Atención deficiente".to_string(),
        ..ClaimDraft::empty()
    }
}
