//! # Error Types
//!
//! Structured error types for rebar_core. Every calculator validates its input
//! record before doing any arithmetic, so a caller either gets a complete
//! result or one of these errors, never a half-computed record.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-4.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric field is outside its valid domain (negative load, zero SBC, NaN, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Dimensions are individually valid but physically inconsistent
    /// (cover swallows the section, footing too small for the shear section).
    #[error("Invalid geometry for {member}: {reason}")]
    InvalidGeometry { member: String, reason: String },

    /// Input record could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(member: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

/// Reject NaN and infinities, then require `value > 0`.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

/// Reject a derived quantity that overflowed to infinity or became NaN.
///
/// Inputs can each be finite yet combine into a non-finite intermediate
/// (e.g. a huge load over a tiny bearing capacity).
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Inputs are out of range: derived value is not a finite number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-4", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_geometry("beam", "d <= 0").error_code(),
            "INVALID_GEOMETRY"
        );
        assert_eq!(
            CalcError::invalid_input("x", "1", "bad").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            CalcError::serialization("eof").error_code(),
            "SERIALIZATION_ERROR"
        );
    }

    #[test]
    fn test_geometry_message() {
        let error = CalcError::invalid_geometry("Beam 'B-1'", "effective depth is -5 mm");
        assert_eq!(
            error.to_string(),
            "Invalid geometry for Beam 'B-1': effective depth is -5 mm"
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("w", 1.0).is_ok());
        assert!(require_positive("w", 0.0).is_err());
        assert!(require_positive("w", f64::NAN).is_err());
        assert!(require_positive("w", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("mu_knm", 0.0).is_ok());
        assert!(require_finite("mu_knm", -3.5).is_ok());
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match require_finite("mu_knm", bad).unwrap_err() {
                CalcError::InvalidInput { field, .. } => assert_eq!(field, "mu_knm"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
