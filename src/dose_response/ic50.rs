//! IC50 estimation by piecewise-linear interpolation
//!
//! # Algorithm
//!
//! 1. Sort the assay points by concentration (stable)
//! 2. Flag repeated concentrations (advisory only)
//! 3. Require the activities to straddle 50%: `min < 50 < max`
//! 4. Infer the direction from the first and last sorted point
//!    - Decreasing: interpolate on the reversed arrays so activity ascends
//!    - Increasing: interpolate on the sorted arrays directly
//! 5. Linearly interpolate the concentration at 50% activity between the two
//!    bracketing points
//!
//! No curve is fitted: the Hill slope is taken as 1 and the fitted curve
//! returned by [`Ic50Estimate::fitted_curve`] is drawn through the estimate
//! for display only.

use serde::{Deserialize, Serialize};

use super::error::DoseResponseError;
use super::hill::{hill_response, inverse_hill_response};
use super::types::*;
use crate::grid::linspace;

/// Activity level that defines the IC50 (%)
pub const HALF_ACTIVITY: f64 = 50.0;

/// Result of a successful IC50 estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ic50Estimate {
    /// Estimated IC50 (same units as the assay concentrations)
    pub ic50: f64,
    /// Direction of the dose-response relation
    pub direction: Direction,
    /// Upper activity used for the fitted curve (%)
    pub top: f64,
    /// Lower activity used for the fitted curve (%)
    pub bottom: f64,
    /// Assay points sorted by concentration
    pub sorted: Vec<DoseResponsePoint>,
    /// Potency band of the estimate
    pub potency: Potency,
    /// Advisories raised during estimation
    pub warnings: Vec<Warning>,
    options: Ic50Options,
}

impl Ic50Estimate {
    pub fn value(&self) -> f64 {
        self.ic50
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Smooth Hill curve (slope 1) through the estimate, for plotting
    ///
    /// Decreasing data uses `bottom + (top - bottom) / (1 + c/IC50)`;
    /// increasing data uses the inverse form `bottom + (top - bottom) / (1 + IC50/c)`.
    pub fn fitted_curve(&self) -> Vec<(f64, f64)> {
        let max_conc = self
            .sorted
            .iter()
            .map(|p| p.concentration)
            .fold(self.options.curve_min_span, f64::max);
        let end = max_conc * self.options.curve_range_factor;

        linspace(self.options.curve_start, end, self.options.curve_points)
            .into_iter()
            .map(|c| {
                let y = match self.direction {
                    Direction::Decreasing => hill_response(c, self.top, self.bottom, self.ic50, 1.0),
                    Direction::Increasing => {
                        inverse_hill_response(c, self.top, self.bottom, self.ic50, 1.0)
                    }
                };
                (c, y)
            })
            .collect()
    }
}

/// Estimate the IC50 of an assay with default options
pub fn estimate(dataset: &AssayDataset) -> Result<Ic50Estimate, DoseResponseError> {
    estimate_with(dataset, &Ic50Options::default())
}

/// Estimate the IC50 of an assay
///
/// # Errors
/// - [`DoseResponseError::InsufficientData`] with fewer than `min_points` points
/// - [`DoseResponseError::InvalidParameter`] for negative or non-finite
///   concentrations, or activities outside 0–100
/// - [`DoseResponseError::OutOfRange`] if the activities do not straddle 50%
pub fn estimate_with(
    dataset: &AssayDataset,
    options: &Ic50Options,
) -> Result<Ic50Estimate, DoseResponseError> {
    let required = options.min_points.max(2);
    if dataset.len() < required {
        return Err(DoseResponseError::InsufficientData {
            n: dataset.len(),
            required,
        });
    }
    validate_points(dataset.points())?;

    let sorted = dataset.sorted();

    let mut warnings = Vec::new();
    let duplicates = dataset.duplicate_count();
    if duplicates > 0 {
        tracing::warn!(count = duplicates, "duplicate concentrations in assay data");
        warnings.push(Warning::DuplicateConcentrations { count: duplicates });
    }

    let (min, max) = dataset
        .activity_range()
        .ok_or(DoseResponseError::InsufficientData { n: 0, required })?;
    if !(min < HALF_ACTIVITY && HALF_ACTIVITY < max) {
        return Err(DoseResponseError::OutOfRange { min, max });
    }

    let concentrations: Vec<f64> = sorted.iter().map(|p| p.concentration).collect();
    let activities: Vec<f64> = sorted.iter().map(|p| p.activity).collect();

    let first = activities[0];
    let last = activities[activities.len() - 1];

    let (direction, ic50, top, bottom) = if first > last {
        let rev_act: Vec<f64> = activities.iter().rev().copied().collect();
        let rev_conc: Vec<f64> = concentrations.iter().rev().copied().collect();
        let ic50 = interpolate(HALF_ACTIVITY, &rev_act, &rev_conc);
        (Direction::Decreasing, ic50, first, last)
    } else {
        let ic50 = interpolate(HALF_ACTIVITY, &activities, &concentrations);
        (Direction::Increasing, ic50, last, first)
    };

    let potency = Potency::classify(ic50);
    tracing::debug!(ic50, ?direction, %potency, "estimated IC50");

    Ok(Ic50Estimate {
        ic50,
        direction,
        top,
        bottom,
        sorted,
        potency,
        warnings,
        options: *options,
    })
}

fn validate_points(points: &[DoseResponsePoint]) -> Result<(), DoseResponseError> {
    for p in points {
        if !p.concentration.is_finite() || p.concentration < 0.0 {
            return Err(DoseResponseError::invalid("concentration", p.concentration));
        }
        if !p.activity.is_finite() || !(0.0..=100.0).contains(&p.activity) {
            return Err(DoseResponseError::invalid("activity", p.activity));
        }
    }
    Ok(())
}

/// Piecewise-linear interpolation of `fp` at `x` over abscissae `xp`
///
/// An exact hit returns the matching ordinate (the last one if `x` repeats).
/// Otherwise the first segment that brackets `x` is interpolated. Outside the
/// range of `xp` the nearest end value is returned.
pub(crate) fn interpolate(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }

    if let Some(i) = (0..n).rev().find(|&i| xp[i] == x) {
        return fp[i];
    }

    for i in 0..n - 1 {
        let (x0, x1) = (xp[i], xp[i + 1]);
        let lo = x0.min(x1);
        let hi = x0.max(x1);
        if lo < x && x < hi {
            let t = (x - x0) / (x1 - x0);
            return fp[i] + t * (fp[i + 1] - fp[i]);
        }
    }

    if x < xp[0] {
        fp[0]
    } else {
        fp[n - 1]
    }
}
