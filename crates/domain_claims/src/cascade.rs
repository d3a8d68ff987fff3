//! Cascading location filters
//!
//! Department, province and district selectors are all derived from the
//! flat location table:
//!
//! ```text
//! all rows ──department==D──▶ department rows ──province==P──▶ district rows
//!    │                              │                              │
//! unique departments          unique provinces            one option per row
//! ```
//!
//! Department and province options are deduplicated by value. District
//! options are the rows themselves, so two rows sharing a district name still
//! produce two options with distinct ids.

use std::collections::HashSet;

use crate::reference::LocationEntry;

/// Unique department names across the whole table, in first-seen order
pub fn departments(locations: &[LocationEntry]) -> Vec<&str> {
    unique(locations.iter().map(|entry| entry.department.as_str()))
}

/// Rows belonging to a department
///
/// An empty selection yields no rows, even if the table contains rows with a
/// blank department.
pub fn entries_for_department<'a>(
    locations: &'a [LocationEntry],
    department: &str,
) -> Vec<&'a LocationEntry> {
    if department.is_empty() {
        return Vec::new();
    }
    locations
        .iter()
        .filter(|entry| entry.department == department)
        .collect()
}

/// Narrows department rows to a province
pub fn entries_for_province<'a>(
    department_rows: &[&'a LocationEntry],
    province: &str,
) -> Vec<&'a LocationEntry> {
    if province.is_empty() {
        return Vec::new();
    }
    department_rows
        .iter()
        .copied()
        .filter(|entry| entry.province == province)
        .collect()
}

/// Unique province names among department rows, in first-seen order
pub fn provinces<'a>(department_rows: &[&'a LocationEntry]) -> Vec<&'a str> {
    unique(department_rows.iter().map(|entry| entry.province.as_str()))
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

/// Everything the three location selectors need to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOptions<'a> {
    pub departments: Vec<&'a str>,
    pub provinces: Vec<&'a str>,
    pub districts: Vec<&'a LocationEntry>,
    /// The province selector is usable once a department is chosen
    pub province_enabled: bool,
    /// The district selector is usable once a province is chosen
    pub district_enabled: bool,
}

/// Derives the selector options for the current selection
pub fn options<'a>(
    locations: &'a [LocationEntry],
    selected_department: &str,
    selected_province: &str,
) -> CascadeOptions<'a> {
    let department_rows = entries_for_department(locations, selected_department);
    let districts = entries_for_province(&department_rows, selected_province);

    CascadeOptions {
        departments: departments(locations),
        provinces: provinces(&department_rows),
        districts,
        province_enabled: !selected_department.is_empty(),
        district_enabled: !selected_province.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<LocationEntry> {
        vec![
            LocationEntry::new(1, "Lima", "Lima", "Miraflores"),
            LocationEntry::new(2, "Lima", "Lima", "Surco"),
            LocationEntry::new(3, "Cusco", "Cusco", "Cusco"),
            LocationEntry::new(4, "Lima", "Huaura", "Huacho"),
        ]
    }

    #[test]
    fn test_departments_are_unique_in_first_seen_order() {
        let rows = table();
        assert_eq!(departments(&rows), vec!["Lima", "Cusco"]);
    }

    #[test]
    fn test_empty_department_selects_nothing() {
        let mut rows = table();
        rows.push(LocationEntry::new(5, "", "", ""));
        assert!(entries_for_department(&rows, "").is_empty());
    }

    #[test]
    fn test_provinces_for_department() {
        let rows = table();
        let lima = entries_for_department(&rows, "Lima");
        assert_eq!(lima.len(), 3);
        assert_eq!(provinces(&lima), vec!["Lima", "Huaura"]);
    }

    #[test]
    fn test_options_disable_downstream_selectors() {
        let rows = table();
        let opts = options(&rows, "", "");
        assert!(!opts.province_enabled);
        assert!(!opts.district_enabled);
        assert!(opts.provinces.is_empty());
        assert!(opts.districts.is_empty());

        let opts = options(&rows, "Lima", "");
        assert!(opts.province_enabled);
        assert!(!opts.district_enabled);
    }
}
