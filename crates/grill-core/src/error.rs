//! # Error Types
//!
//! Domain-specific error types for grill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grill-core errors (this file)                                         │
//! │  ├── CoreError        - Checkout / lookup failures seen by commands    │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  grill-store                                                           │
//! │  └── (none)           - Store mutations are total: unknown ids no-op   │
//! │                                                                         │
//! │  kiosk app                                                             │
//! │  └── ApiError         - What the shell prints (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store itself never fails. These errors exist for the layer in front of
//! it, which validates input and reports lookups that matched nothing.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the command layer while driving the core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An id matched nothing in the collection it was looked up in.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. non-numeric price, malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
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
        let err = CoreError::not_found("Order", "PED-999");
        assert_eq!(err.to_string(), "Order not found: PED-999");
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "address".to_string(),
        };
        assert_eq!(err.to_string(), "address is required");

        let err = ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: vec!["burgers".to_string(), "sides".to_string()],
        };
        assert_eq!(
            err.to_string(),
            r#"category must be one of: ["burgers", "sides"]"#
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
