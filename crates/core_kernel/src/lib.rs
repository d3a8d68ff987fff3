//! Core Kernel - Foundational types shared by the claim form crates
//!
//! This crate provides the building blocks used by every other crate:
//! - Strongly-typed identifiers for backend reference data
//! - The port error type and marker trait for backend adapters
//! - The kernel error type

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{DocumentTypeId, LocationId};
pub use ports::{DomainPort, PortError};
pub use error::CoreError;
