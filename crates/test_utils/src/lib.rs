//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim form test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built reference data and drafts
//! - `builders`: Builder patterns for drafts and mock backends
//! - `assertions`: Custom assertion helpers for form state
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
