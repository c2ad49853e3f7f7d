use thiserror::Error;

use crate::dose_response::DoseResponseError;
use crate::kinetics::KineticsError;

#[derive(Error, Debug)]
pub enum EnzinhibError {
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
    #[error(transparent)]
    DoseResponse(#[from] DoseResponseError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse options: {0}")]
    Options(#[from] serde_json::Error),
}
