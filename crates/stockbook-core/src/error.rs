//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockbook-core errors (this file)                                  │
//! │  ├── StoreError       - Aggregate operation failures                │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Flow: ValidationError ──► StoreError ──► caller / terminal app     │
//! │                                                                     │
//! │  The store returns every failure to the caller. Only the terminal   │
//! │  app turns errors into printed messages.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, available stock, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Failures raised by store operations.
///
/// These represent business rule violations. They are recoverable at the
/// call site; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product in the catalog has the given code.
    ///
    /// ## When This Occurs
    /// - An invoice line references a code that was never added
    /// - An availability check runs after the product was deleted
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the product's current stock.
    ///
    /// ## When This Occurs
    /// - An invoice tries to sell more units than the catalog holds
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice line (code: "P1", quantity: 5)
    ///      │
    ///      ▼
    /// Check stock: available = 3
    ///      │
    ///      ▼
    /// InsufficientStock { code: "P1", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Terminal prints: "Error adding invoice: ..."
    /// ```
    #[error("Insufficient stock for {code}: available {available}, requested {requested}")]
    InsufficientStock {
        code: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a ProductNotFound error.
    pub fn not_found(code: impl Into<String>) -> Self {
        StoreError::ProductNotFound(code.into())
    }

    /// Creates an InsufficientStock error.
    pub fn insufficient_stock(code: impl Into<String>, available: i64, requested: i64) -> Self {
        StoreError::InsufficientStock {
            code: code.into(),
            available,
            requested,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., date text that is not YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field name is not part of the updatable product field set.
    #[error("{field} is not an updatable product field")]
    UnknownField { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::insufficient_stock("MILK-1L", 3, 5);
        assert_eq!(
            err.to_string(),
            "Insufficient stock for MILK-1L: available 3, requested 5"
        );

        let err = StoreError::not_found("P9");
        assert_eq!(err.to_string(), "Product not found: P9");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "keyword".to_string(),
        };
        assert_eq!(err.to_string(), "keyword is required");

        let err = ValidationError::UnknownField {
            field: "bogus_field".to_string(),
        };
        assert_eq!(err.to_string(), "bogus_field is not an updatable product field");

        let err = ValidationError::InvalidFormat {
            field: "expiration_date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expiration_date has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
