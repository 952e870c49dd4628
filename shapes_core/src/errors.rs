//! # Error Types
//!
//! Structured error types for shapes_core. The records in this crate are
//! plain data, so the only failure a caller can hit at runtime is an
//! incomplete builder.
//!
//! ## Example
//!
//! ```rust
//! use shapes_core::errors::{ShapeError, ShapeResult};
//! use shapes_core::sections::SectionProfileData;
//!
//! let result: ShapeResult<SectionProfileData> =
//!     SectionProfileData::builder().name("W14x90").build();
//!
//! assert_eq!(result, Err(ShapeError::missing_field("nominal_weight")));
//! ```

use thiserror::Error;

/// Result type alias for shapes_core operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Structured error type for section profile construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "details"))]
pub enum ShapeError {
    /// A required field was never supplied to a builder
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ShapeError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ShapeError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShapeError::MissingField { .. } => "MISSING_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ShapeError::missing_field("ix").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_error_message_names_field() {
        let error = ShapeError::missing_field("tw");
        assert_eq!(error.to_string(), "Missing required field: tw");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serialization() {
        let error = ShapeError::missing_field("area");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"type":"MissingField","details":{"field":"area"}}"#);
    }
}
