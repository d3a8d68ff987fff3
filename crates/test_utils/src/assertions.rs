//! Custom Test Assertions
//!
//! Assertion helpers for form state that print the offending values.

use domain_claims::{FormState, LocationEntry};

/// Asserts that the draft and both selections are empty
pub fn assert_form_pristine(state: &FormState) {
    assert!(
        state.is_pristine(),
        "Expected an empty form, got draft={:?} department={:?} province={:?}",
        state.draft,
        state.selected_department,
        state.selected_province
    );
}

/// Asserts that the draft's province and district are consistent with the
/// location table
pub fn assert_location_consistent(state: &FormState, locations: &[LocationEntry]) {
    let draft = &state.draft;
    if !draft.province.is_empty() {
        assert!(
            locations
                .iter()
                .any(|e| e.department == draft.department && e.province == draft.province),
            "Province {:?} does not belong to department {:?}",
            draft.province,
            draft.department
        );
    }
    if !draft.district.is_empty() {
        assert!(
            locations
                .iter()
                .any(|e| e.matches(&draft.department, &draft.province, &draft.district)),
            "District {:?} does not belong to {:?}/{:?}",
            draft.district,
            draft.department,
            draft.province
        );
    }
}

/// Asserts that district options are exactly the given location ids, in order
pub fn assert_district_ids(districts: &[&LocationEntry], expected: &[i64]) {
    let actual: Vec<i64> = districts.iter().map(|e| e.id.value()).collect();
    assert_eq!(actual, expected, "District option ids differ");
}
