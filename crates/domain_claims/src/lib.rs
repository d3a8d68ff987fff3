//! Claim Form Domain
//!
//! This crate implements the citizen claim (reclamo) form: the draft being
//! edited, the backend's reference data, the cascading location selectors,
//! and the submission contract.
//!
//! # Form Lifecycle
//!
//! ```text
//! load reference data -> edit fields (reducer) -> submit -> success: reset
//!                                                        -> failure: keep draft
//! ```

pub mod draft;
pub mod reference;
pub mod cascade;
pub mod form;
pub mod submission;
pub mod validation;
pub mod ports;
pub mod service;
pub mod error;

pub use draft::{ClaimDraft, ClaimField, MAX_DESCRIPTION_LENGTH};
pub use reference::{DocumentTypeOption, LocationEntry, ReferenceData};
pub use cascade::CascadeOptions;
pub use form::{reduce, FormEvent, FormState};
pub use submission::{ClaimPayload, DocumentTypeRef, LocationRef, SubmissionNotice, SubmissionOutcome};
pub use validation::{ClaimValidator, ValidationResult};
pub use ports::ClaimsBackendPort;
pub use service::{ClaimFormSession, LoadReport, LoadStatus, SessionSettings};
pub use error::ClaimError;
