//! # Error Types
//!
//! Structured error types for tow_core. Each variant carries enough context
//! for a front-end to explain the problem to the operator and for tooling
//! to handle it programmatically.
//!
//! ## Example
//!
//! ```rust
//! use tow_core::errors::{TowError, TowResult};
//!
//! fn validate_weight(weight_lb: f64) -> TowResult<()> {
//!     if weight_lb < 0.0 {
//!         return Err(TowError::InvalidInput {
//!             field: "weight_lb".to_string(),
//!             value: weight_lb.to_string(),
//!             reason: "Weight must be non-negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tow_core operations
pub type TowResult<T> = Result<T, TowError>;

/// Structured error type for tongue weight calculations.
///
/// The engine either produces a well-formed result or fails with one of
/// these; there are no partial results and nothing to retry.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TowError {
    /// The trailer configuration as a whole is degenerate (no loads, no
    /// axles, zero total weight, axle group at the hitch)
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    /// A single input value is invalid (negative, non-finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TowError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TowError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TowError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TowError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            TowError::InvalidInput { .. } => "INVALID_INPUT",
            TowError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TowError::invalid_input("weight_lb", "-250", "Weight must be non-negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: TowError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let err = TowError::invalid_configuration("loads", "0", "At least one load is required");
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        assert_eq!(
            TowError::invalid_input("distance_in", "NaN", "not finite").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TowError::invalid_configuration("axles", "0", "At least one axle is required");
        let msg = err.to_string();
        assert!(msg.contains("axles"));
        assert!(msg.contains("At least one axle is required"));
    }
}
