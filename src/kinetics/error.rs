//! Kinetics error types

use thiserror::Error;

/// Errors that can occur while evaluating a kinetic model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    /// A parameter is non-finite or outside its admissible range
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// A denominator would be zero
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },
}

impl KineticsError {
    pub(crate) fn invalid(param: &str, value: f64) -> Self {
        KineticsError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}
