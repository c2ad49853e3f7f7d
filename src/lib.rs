pub mod dose_response;
pub mod error;
mod grid;
pub mod kinetics;
pub mod options;

pub use error::EnzinhibError;
pub use options::EngineOptions;

pub use dose_response::{
    AssayDataset, DoseResponseError, DoseResponsePoint, HillCurveParams, Ic50Estimate, KiResult,
};
pub use kinetics::{
    ApparentParameters, Inhibitor, KineticModel, KineticParameters, KineticsError, Mechanism,
};

pub mod prelude {
    pub mod kinetics {
        pub use crate::kinetics::{
            alpha_from_inhibitor, analyze, evaluate, lineweaver_burk, sample, sample_pair,
            velocity, ApparentParameters, CurveSampler, Inhibitor, KineticModel,
            KineticParameters, KineticsReport, LineSignature, LineweaverBurkOptions,
            LineweaverBurkPlot, Mechanism, SamplerOptions, Spacing,
        };
    }
    pub mod dose_response {
        pub use crate::dose_response::{
            estimate, estimate_with, generate, generate_with, to_csv_string, to_ki, write_csv,
            write_csv_file, AssayDataset, Direction, DoseResponsePoint, HillCurve,
            HillCurveParams, HillOptions, Ic50Estimate, Ic50Options, KiResult, Potency, Warning,
        };
    }

    pub use crate::dose_response::{
        estimate, generate, to_ki, AssayDataset, DoseResponsePoint, HillCurveParams,
    };
    pub use crate::kinetics::{Inhibitor, KineticParameters, LineSignature, Mechanism};
    pub use crate::{DoseResponseError, EngineOptions, EnzinhibError, KineticsError};
}
