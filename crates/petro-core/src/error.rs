//! # Error Types
//!
//! Domain-specific error types for petro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petro-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  petro-store errors (separate crate)                                   │
//! │  └── StoreError       - Customer file failures                         │
//! │                                                                         │
//! │  petro-batch errors (app)                                              │
//! │  └── ConfigError      - Configuration / input file failures            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note on Business Outcomes
//! A rejected order or an unknown product is NOT an error at the pipeline
//! surface: `process_order` returns zero and logs a diagnostic. These types
//! describe *why* a value was rejected and are used by the validation step
//! and by parsers.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product identifier is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Parsing a `Product` from an unknown identifier (e.g. "agua")
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A monetary literal could not be parsed.
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the validation step of the order pipeline and by the
/// customer presence check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("agua".to_string());
        assert_eq!(err.to_string(), "Product not found: agua");

        let err = CoreError::InvalidAmount {
            value: "abc".to_string(),
            reason: "Invalid decimal".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid amount 'abc': Invalid decimal");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("product").to_string(),
            "product is required"
        );

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("email").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
