//! Enzyme-inhibition kinetics
//!
//! Forward Michaelis–Menten models for the four reversible inhibition
//! mechanisms, curve sampling for plotting and the Lineweaver–Burk
//! linearization.
//!
//! # Usage
//!
//! ```rust
//! use enzinhib::kinetics::{Inhibitor, KineticParameters, Mechanism};
//!
//! let inhibitor = Inhibitor::new(2.0, 1.0); // [I] = 2 µM, Ki = 1 µM
//! let params = KineticParameters::new(1.0, 50.0, Mechanism::Competitive)
//!     .with_inhibitor(&inhibitor)
//!     .unwrap();
//!
//! let model = params.model().unwrap();
//! assert_eq!(model.apparent().apparent_km, 3.0);
//! assert_eq!(model.velocity(1.0).unwrap(), 12.5);
//! ```
//!
//! All functions are pure: the same inputs always produce the same outputs.

mod error;
pub mod lineweaver_burk;
mod model;
mod report;
mod sampler;

pub use error::KineticsError;
pub use lineweaver_burk::{
    LineSignature, LineweaverBurkOptions, LineweaverBurkPlot, ReciprocalPoint,
};
pub use model::{
    alpha_from_inhibitor, evaluate, michaelis_menten, ApparentParameters, Inhibitor,
    KineticModel, KineticParameters, Mechanism,
};
pub use report::{analyze, KineticsReport, ReferenceLines};
pub use sampler::{sample, sample_pair, CurveSampler, SamplerOptions, Spacing};

/// Velocity for a parameter set at substrate concentration `s`
pub fn velocity(params: &KineticParameters, s: f64) -> Result<f64, KineticsError> {
    params.model()?.velocity(s)
}
