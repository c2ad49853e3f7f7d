//! Dose-response analysis for enzyme inhibitors
//!
//! This module turns inhibition assay data into potency metrics:
//!
//! | Operation | Function |
//! |-----------|----------|
//! | IC50 from discrete assay points | [`estimate`], [`estimate_with`] |
//! | IC50 → Ki (Cheng–Prusoff) | [`to_ki`] |
//! | Theoretical Hill curve | [`generate`], [`generate_with`] |
//! | CSV export of an IC50 result | [`write_csv`], [`to_csv_string`], [`write_csv_file`] |
//!
//! # Usage
//!
//! ```rust
//! use enzinhib::dose_response::{estimate, to_ki, AssayDataset};
//! use enzinhib::kinetics::Mechanism;
//!
//! let data = AssayDataset::from_arrays(
//!     &[1.0, 2.0, 4.0, 8.0, 16.0],
//!     &[90.0, 70.0, 50.0, 30.0, 10.0],
//! ).unwrap();
//!
//! let result = estimate(&data).unwrap();
//! assert_eq!(result.ic50, 4.0);
//!
//! let ki = to_ki(result.ic50, 10.0, 5.0, Mechanism::Competitive).unwrap();
//! assert!(ki.value < result.ic50);
//! ```
//!
//! The IC50 is obtained by linear interpolation between the two assay points
//! that bracket 50% activity. No nonlinear fit is performed.

mod cheng_prusoff;
mod error;
mod export;
mod hill;
mod ic50;
mod types;


pub use cheng_prusoff::to_ki;
pub use error::DoseResponseError;
pub use export::{to_csv_string, write_csv, write_csv_file, DEFAULT_FILE_NAME};
pub use hill::{generate, generate_with, hill_response, inverse_hill_response, HillCurve};
pub use ic50::{estimate, estimate_with, Ic50Estimate, HALF_ACTIVITY};
pub use types::{
    AssayDataset, Direction, DoseResponsePoint, HillCurveParams, HillOptions, Ic50Options,
    KiResult, Potency, Warning,
};
