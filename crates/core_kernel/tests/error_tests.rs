//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_invalid_identifier_display() {
    let error = CoreError::invalid_identifier("location id 'x' is not numeric");
    assert_eq!(
        error.to_string(),
        "Invalid identifier: location id 'x' is not numeric"
    );
}

#[test]
fn test_port_error_validation_has_no_field() {
    match PortError::validation("descripcion too long") {
        PortError::Validation { message, field } => {
            assert_eq!(message, "descripcion too long");
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_port_error_timeout_display() {
    let error = PortError::Timeout {
        operation: "POST /api/reclamos".to_string(),
        duration_ms: 5000,
    };
    assert_eq!(error.to_string(), "Timeout after 5000ms: POST /api/reclamos");
    assert!(error.is_transient());
}
