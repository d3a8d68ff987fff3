//! Command-Line Front End
//!
//! This crate drives the claim form from a terminal instead of a browser.
//!
//! # Commands
//!
//! - **options**: loads reference data and prints the selectors for an
//!   optional department/province selection
//! - **submit**: replays a draft file through the form and submits it
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::CliConfig, show_options};
//!
//! let config = CliConfig::from_env()?;
//! let backend = HttpClaimsBackend::new(config.backend())?;
//! let mut session = ClaimFormSession::new(backend, config.session());
//! println!("{}", show_options(&mut session, Some("Lima".into()), None).await);
//! ```

pub mod config;
pub mod error;
pub mod draft_file;
pub mod render;

use domain_claims::{ClaimFormSession, ClaimsBackendPort, FormEvent, SubmissionNotice};

/// Loads reference data and renders every selector
///
/// The department and province, when given, are applied as selector changes
/// so the dependent lists reflect them. A collection that failed to load is
/// logged by the session and renders as an empty selector.
pub async fn show_options<P: ClaimsBackendPort>(
    session: &mut ClaimFormSession<P>,
    department: Option<String>,
    province: Option<String>,
) -> String {
    session.load_reference_data().await;

    if let Some(department) = department {
        session.apply(FormEvent::DepartmentChanged(department));
    }
    if let Some(province) = province {
        session.apply(FormEvent::ProvinceChanged(province));
    }

    let mut out = render::document_types(session.reference().document_types());
    out.push_str(&render::locations(&session.options()));
    out
}

/// Loads reference data, replays the draft events, and submits
pub async fn submit_draft<P: ClaimsBackendPort>(
    session: &mut ClaimFormSession<P>,
    events: Vec<FormEvent>,
) -> SubmissionNotice {
    session.load_reference_data().await;

    for event in events {
        session.apply(event);
    }

    let outcome = session.submit().await;
    tracing::debug!(success = outcome.is_success(), "Submission settled");
    outcome.notice()
}
