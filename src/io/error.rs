//! Error types for configuration, reporting, and output
//!
//! The search itself has no recoverable failures: a broken internal invariant
//! is a bug and panics. Everything here concerns the layers around it.

use std::fmt;

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum SearchError {
    /// Search parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode the search report
    Serialization {
        /// Underlying encoder error
        source: serde_json::Error,
    },

    /// Progress reporter thread could not be started or joined
    Reporter {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { source } => {
                write!(f, "Failed to encode search report: {source}")
            }
            Self::Reporter { reason } => {
                write!(f, "Progress reporter failure: {reason}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, SearchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a progress reporter error
pub fn reporter_error(reason: &impl ToString) -> SearchError {
    SearchError::Reporter {
        reason: reason.to_string(),
    }
}
