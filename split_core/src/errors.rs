//! # Error Types
//!
//! Structured error types for split_core. User-facing input never produces
//! these (raw text normalizes to the nearest valid value instead); they guard
//! the programmatic API, where a structured error is more useful than a
//! silently clamped result.
//!
//! ## Example
//!
//! ```rust
//! use split_core::errors::{SplitError, SplitResult};
//!
//! fn validate_people(people_count: u32) -> SplitResult<()> {
//!     if people_count == 0 {
//!         return Err(SplitError::invalid_input(
//!             "people_count",
//!             "0",
//!             "At least one person is required",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for split_core operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Structured error type for split operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SplitError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl SplitError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SplitError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SplitError::invalid_input("total_amount", "-500", "Amount must be non-negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SplitError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_display() {
        let error = SplitError::invalid_input("people_count", "0", "At least one person is required");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'people_count': 0 - At least one person is required"
        );
    }
}
