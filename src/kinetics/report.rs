//! Side-by-side evaluation of an enzyme with and without inhibitor
//!
//! [`analyze`] bundles everything a kinetics view needs from a single
//! [`KineticParameters`]: apparent parameters for both conditions, the two
//! Michaelis–Menten curves, the two Lineweaver–Burk plots and their
//! signature.

use serde::{Deserialize, Serialize};

use super::error::KineticsError;
use super::lineweaver_burk::{self, LineSignature, LineweaverBurkOptions, LineweaverBurkPlot};
use super::model::{ApparentParameters, KineticParameters, Mechanism};
use super::sampler::{sample_pair, SamplerOptions};

/// Reference values for the Km and Vmax/2 guide lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLines {
    pub km: f64,
    pub apparent_km: f64,
    pub half_vmax: f64,
    pub half_apparent_vmax: f64,
}

/// Complete kinetic comparison for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticsReport {
    pub mechanism: Mechanism,
    pub alpha: f64,
    pub alpha_prime: Option<f64>,
    pub baseline: ApparentParameters,
    pub inhibited: ApparentParameters,
    /// `(S, v)` without inhibitor
    pub mm_baseline: Vec<(f64, f64)>,
    /// `(S, v)` with inhibitor, on the same grid
    pub mm_inhibited: Vec<(f64, f64)>,
    pub lb_baseline: LineweaverBurkPlot,
    pub lb_inhibited: LineweaverBurkPlot,
    pub signature: LineSignature,
    pub reference: ReferenceLines,
}

impl KineticsReport {
    /// Fold change of Km caused by the inhibitor
    pub fn km_fold_change(&self) -> f64 {
        self.inhibited.apparent_km / self.baseline.apparent_km
    }

    /// Fraction of Vmax that remains under inhibition
    pub fn vmax_fraction(&self) -> f64 {
        self.inhibited.apparent_vmax / self.baseline.apparent_vmax
    }
}

/// Evaluate a parameter set against its own uninhibited baseline
pub fn analyze(
    params: &KineticParameters,
    sampler: &SamplerOptions,
    lineweaver_burk: &LineweaverBurkOptions,
) -> Result<KineticsReport, KineticsError> {
    let (mm_baseline, mm_inhibited) = sample_pair(params, sampler)?;

    let baseline_model = *mm_baseline.model();
    let inhibited_model = *mm_inhibited.model();

    let lb_baseline = lineweaver_burk::transform(&baseline_model, lineweaver_burk)?;
    let lb_inhibited = lineweaver_burk::transform(&inhibited_model, lineweaver_burk)?;
    let signature = lineweaver_burk::compare(&lb_baseline, &lb_inhibited);

    let baseline = baseline_model.apparent();
    let inhibited = inhibited_model.apparent();

    Ok(KineticsReport {
        mechanism: params.mechanism,
        alpha: params.alpha,
        alpha_prime: params.alpha_prime.filter(|_| params.mechanism.uses_alpha_prime()),
        baseline,
        inhibited,
        mm_baseline: mm_baseline.collect(),
        mm_inhibited: mm_inhibited.collect(),
        lb_baseline,
        lb_inhibited,
        signature,
        reference: ReferenceLines {
            km: baseline.apparent_km,
            apparent_km: inhibited.apparent_km,
            half_vmax: baseline.half_vmax(),
            half_apparent_vmax: inhibited.half_vmax(),
        },
    })
}
