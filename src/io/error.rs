//! Error types for counting and reporting operations

use num_bigint::BigUint;
use std::fmt;

/// Main error type for all counting operations
///
/// Malformed tilings are not errors; the validator reports them as invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// Brute-force enumeration requested beyond its supported length
    ///
    /// Enumeration visits `3^length` candidates, so lengths above the limit
    /// are rejected instead of exhausting time and memory.
    LengthLimitExceeded {
        /// Requested strip length
        requested: usize,
        /// Largest length the enumerator accepts
        limit: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Recurrence and brute-force counts disagree
    Mismatch {
        /// Strip length being compared
        columns: usize,
        /// Domino count being compared, `None` for the total
        dominoes: Option<usize>,
        /// Count produced by the recurrence
        recurrence: BigUint,
        /// Count produced by enumeration
        brute: usize,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthLimitExceeded { requested, limit } => {
                write!(
                    f,
                    "Brute-force enumeration of length {requested} exceeds the limit of {limit}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Mismatch {
                columns,
                dominoes: Some(dominoes),
                recurrence,
                brute,
            } => {
                write!(
                    f,
                    "Count mismatch for {columns} columns with {dominoes} dominoes: recurrence {recurrence}, brute force {brute}"
                )
            }
            Self::Mismatch {
                columns,
                dominoes: None,
                recurrence,
                brute,
            } => {
                write!(
                    f,
                    "Total mismatch for {columns} columns: recurrence {recurrence}, brute force {brute}"
                )
            }
        }
    }
}

impl std::error::Error for TilingError {}

/// Convenience type alias for counting results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
