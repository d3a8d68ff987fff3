//! Draft files
//!
//! A draft file is a JSON object keyed by form field name:
//!
//! ```json
//! {
//!   "tipoDocumento": "1",
//!   "numeroDocumento": "40123456",
//!   "departamento": "Lima",
//!   "provincia": "Lima",
//!   "distrito": "Miraflores",
//!   "descripcion": "Cobro indebido"
//! }
//! ```
//!
//! Fields are replayed as form events. Location fields go last and in
//! cascade order, since each selection clears the ones below it.

use std::collections::BTreeMap;
use std::path::Path;

use domain_claims::{ClaimField, FormEvent};

use crate::error::CliError;

/// Reads a draft file and turns it into form events
pub fn load(path: &Path) -> Result<Vec<FormEvent>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::DraftRead {
        path: path.display().to_string(),
        source,
    })?;
    parse(&raw)
}

/// Parses draft JSON into form events
pub fn parse(raw: &str) -> Result<Vec<FormEvent>, CliError> {
    let values: BTreeMap<String, String> = serde_json::from_str(raw)?;

    let mut fields = Vec::with_capacity(values.len());
    for (name, value) in values {
        let field: ClaimField = name.parse()?;
        fields.push((field, value));
    }

    // Form order puts department before province before district.
    fields.sort_by_key(|(field, _)| {
        let position = ClaimField::ALL
            .iter()
            .position(|f| f == field)
            .unwrap_or(usize::MAX);
        (field.is_location(), position)
    });

    Ok(fields
        .into_iter()
        .map(|(field, value)| FormEvent::edit(field, value))
        .collect())
}
