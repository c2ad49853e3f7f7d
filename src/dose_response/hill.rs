//! Hill-equation dose-response curves
//!
//! `response(c) = bottom + (top - bottom) / (1 + (c / IC50)^h)`
//!
//! At `c = IC50` the response is the midpoint `(top + bottom) / 2` for every
//! Hill slope `h`. A `bottom` above `top` gives an inverted (rising) sigmoid,
//! which is accepted with a [`Warning::InvertedCurve`].

use serde::{Deserialize, Serialize};

use super::error::DoseResponseError;
use super::types::{HillCurveParams, HillOptions, Warning};
use crate::grid::logspace;

/// Weighted blend of the asymptotes; `w = 0.5` gives exactly `(top + bottom) / 2`
#[inline]
fn blend(top: f64, bottom: f64, w: f64) -> f64 {
    top * w + bottom * (1.0 - w)
}

/// Forward Hill response at concentration `c`
#[inline]
pub fn hill_response(c: f64, top: f64, bottom: f64, ic50: f64, hill_slope: f64) -> f64 {
    blend(top, bottom, 1.0 / (1.0 + (c / ic50).powf(hill_slope)))
}

/// Inverse Hill response, rising from `bottom` to `top` with concentration
#[inline]
pub fn inverse_hill_response(c: f64, top: f64, bottom: f64, ic50: f64, hill_slope: f64) -> f64 {
    blend(top, bottom, 1.0 / (1.0 + (ic50 / c).powf(hill_slope)))
}

impl HillCurveParams {
    pub fn new(top: f64, bottom: f64, ic50: f64, hill_slope: f64, conc_max: f64) -> Self {
        Self {
            top,
            bottom,
            ic50,
            hill_slope,
            conc_max,
        }
    }

    pub fn validate(&self) -> Result<(), DoseResponseError> {
        for (name, value) in [("top", self.top), ("bottom", self.bottom)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DoseResponseError::invalid(name, value));
            }
        }
        for (name, value) in [
            ("ic50", self.ic50),
            ("hill_slope", self.hill_slope),
            ("conc_max", self.conc_max),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DoseResponseError::invalid(name, value));
            }
        }
        Ok(())
    }

    /// Response at concentration `c`
    pub fn response(&self, c: f64) -> f64 {
        hill_response(c, self.top, self.bottom, self.ic50, self.hill_slope)
    }

    /// Activity level at the IC50
    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    pub fn is_inverted(&self) -> bool {
        self.bottom > self.top
    }
}

/// A sampled theoretical dose-response curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HillCurve {
    pub params: HillCurveParams,
    /// `(concentration, response)` on a log-spaced grid
    pub points: Vec<(f64, f64)>,
    pub warnings: Vec<Warning>,
}

impl HillCurve {
    /// `(IC50, midpoint activity)` for the reference lines
    pub fn midpoint(&self) -> (f64, f64) {
        (self.params.ic50, self.params.midpoint())
    }

    pub fn concentrations(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(c, _)| c)
    }

    pub fn responses(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, r)| r)
    }
}

/// Generate a theoretical curve with default sampling
pub fn generate(params: &HillCurveParams) -> Result<HillCurve, DoseResponseError> {
    generate_with(params, &HillOptions::default())
}

/// Generate a theoretical curve
///
/// Concentrations run from `10^floor_exponent` to `conc_max` on a log grid,
/// so `conc_max` must lie above the floor.
pub fn generate_with(
    params: &HillCurveParams,
    options: &HillOptions,
) -> Result<HillCurve, DoseResponseError> {
    params.validate()?;
    if !options.floor_exponent.is_finite() {
        return Err(DoseResponseError::invalid(
            "hill.floor_exponent",
            options.floor_exponent,
        ));
    }
    let floor = 10f64.powf(options.floor_exponent);
    if params.conc_max <= floor {
        return Err(DoseResponseError::InvalidParameter {
            param: "conc_max".to_string(),
            value: format!("{} (must exceed the grid floor {})", params.conc_max, floor),
        });
    }

    let mut warnings = Vec::new();
    if params.is_inverted() {
        tracing::warn!(
            top = params.top,
            bottom = params.bottom,
            "bottom activity above top; curve is inverted"
        );
        warnings.push(Warning::InvertedCurve {
            top: params.top,
            bottom: params.bottom,
        });
    }

    let points = logspace(
        options.floor_exponent,
        params.conc_max.log10(),
        options.points,
    )
    .into_iter()
    .map(|c| (c, params.response(c)))
    .collect();

    Ok(HillCurve {
        params: *params,
        points,
        warnings,
    })
}
