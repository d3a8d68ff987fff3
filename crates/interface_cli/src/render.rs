//! Plain-text rendering of form options and notices

use std::fmt::Write;

use domain_claims::{CascadeOptions, DocumentTypeOption, SubmissionNotice};

/// Renders the document type selector
pub fn document_types(options: &[DocumentTypeOption]) -> String {
    let mut out = String::from("Tipo de Documento:\n");
    for option in options {
        let _ = writeln!(out, "  [{}] {}", option.id, option.display_name);
    }
    out
}

/// Renders the three location selectors
pub fn locations(options: &CascadeOptions<'_>) -> String {
    let mut out = String::from("Departamento:\n");
    for department in &options.departments {
        let _ = writeln!(out, "  {}", department);
    }

    out.push_str(&selector_header("Provincia", options.province_enabled));
    for province in &options.provinces {
        let _ = writeln!(out, "  {}", province);
    }

    out.push_str(&selector_header("Distrito", options.district_enabled));
    for entry in &options.districts {
        let _ = writeln!(out, "  [{}] {}", entry.id, entry.district);
    }
    out
}

fn selector_header(label: &str, enabled: bool) -> String {
    if enabled {
        format!("{}:\n", label)
    } else {
        format!("{} (deshabilitado):\n", label)
    }
}

/// Renders a submission notice
pub fn notice(notice: &SubmissionNotice) -> String {
    match notice {
        SubmissionNotice::Success { message } => message.clone(),
        SubmissionNotice::Failure { message, details } => {
            let mut out = message.clone();
            for detail in details {
                let _ = write!(out, "\n  - {}", detail);
            }
            out
        }
    }
}
