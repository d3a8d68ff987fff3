//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}
