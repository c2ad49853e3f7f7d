//! Dose-response error types

use thiserror::Error;

/// Errors that can occur during dose-response analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoseResponseError {
    /// Invalid parameter value
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// A denominator would be zero
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// The assay activities never cross the 50% threshold
    #[error(
        "Cannot estimate IC50: data must cross 50% activity (observed range {min:.1}% to {max:.1}%)"
    )]
    OutOfRange {
        /// Lowest observed activity (%)
        min: f64,
        /// Highest observed activity (%)
        max: f64,
    },

    /// Too few assay points
    #[error("Insufficient data: {n} points, need at least {required}")]
    InsufficientData {
        /// Number of points available
        n: usize,
        /// Minimum number required
        required: usize,
    },
}

impl DoseResponseError {
    pub(crate) fn invalid(param: &str, value: f64) -> Self {
        DoseResponseError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}
