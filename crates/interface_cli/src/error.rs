//! CLI error handling

use thiserror::Error;

use domain_claims::ClaimError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not read draft file {path}: {source}")]
    DraftRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Draft file is not a JSON object of field values: {0}")]
    DraftParse(#[from] serde_json::Error),

    #[error("Invalid draft: {0}")]
    Draft(#[from] ClaimError),
}
