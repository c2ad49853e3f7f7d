//! Dose-response types: assay data, options, warnings and results
//!
//! This module defines the value types shared by the IC50 estimator, the
//! Cheng–Prusoff converter and the Hill curve generator:
//! - [`AssayDataset`]: concentration/activity pairs from an inhibition assay
//! - [`Ic50Options`], [`HillOptions`]: configuration
//! - [`Warning`]: non-fatal advisories attached to results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DoseResponseError;
use crate::kinetics::Mechanism;

// ============================================================================
// Assay data
// ============================================================================

/// One measurement of an inhibition assay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseResponsePoint {
    /// Inhibitor concentration (µM, ≥ 0)
    pub concentration: f64,
    /// Remaining enzyme activity (%, 0–100)
    pub activity: f64,
}

impl DoseResponsePoint {
    pub fn new(concentration: f64, activity: f64) -> Self {
        Self {
            concentration,
            activity,
        }
    }
}

/// Whether activity falls or rises with inhibitor concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Activity decreases with concentration (typical inhibition)
    Decreasing,
    /// Activity increases with concentration
    Increasing,
}

/// Ordered assay measurements
///
/// Points are kept in entry order; analysis works on a copy sorted by
/// concentration. Concentrations need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssayDataset {
    points: Vec<DoseResponsePoint>,
}

impl AssayDataset {
    pub fn new(points: Vec<DoseResponsePoint>) -> Self {
        Self { points }
    }

    /// Build a dataset from parallel concentration and activity arrays
    ///
    /// # Errors
    /// Returns [`DoseResponseError::InvalidParameter`] if the lengths differ.
    pub fn from_arrays(
        concentrations: &[f64],
        activities: &[f64],
    ) -> Result<Self, DoseResponseError> {
        if concentrations.len() != activities.len() {
            return Err(DoseResponseError::InvalidParameter {
                param: "arrays".to_string(),
                value: format!(
                    "array lengths mismatch: concentrations={}, activities={}",
                    concentrations.len(),
                    activities.len()
                ),
            });
        }
        Ok(Self::new(
            concentrations
                .iter()
                .zip(activities)
                .map(|(&c, &a)| DoseResponsePoint::new(c, a))
                .collect(),
        ))
    }

    /// Append a measurement
    pub fn with_point(mut self, concentration: f64, activity: f64) -> Self {
        self.points.push(DoseResponsePoint::new(concentration, activity));
        self
    }

    pub fn points(&self) -> &[DoseResponsePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy of the points sorted by ascending concentration
    ///
    /// The sort is stable: duplicate concentrations keep their entry order.
    pub fn sorted(&self) -> Vec<DoseResponsePoint> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.concentration.total_cmp(&b.concentration));
        sorted
    }

    /// Number of points whose concentration repeats an earlier one
    pub fn duplicate_count(&self) -> usize {
        let sorted = self.sorted();
        sorted
            .windows(2)
            .filter(|w| w[0].concentration == w[1].concentration)
            .count()
    }

    pub fn has_duplicate_concentrations(&self) -> bool {
        self.duplicate_count() > 0
    }

    /// `(min, max)` observed activity
    pub fn activity_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.activity), hi.max(p.activity))
            });
        Some((min, max))
    }

    /// Largest concentration entered
    pub fn max_concentration(&self) -> Option<f64> {
        self.points.iter().map(|p| p.concentration).reduce(f64::max)
    }

    /// Direction inferred from the first and last point after sorting
    pub fn direction(&self) -> Option<Direction> {
        let sorted = self.sorted();
        let first = sorted.first()?;
        let last = sorted.last()?;
        if first.activity > last.activity {
            Some(Direction::Decreasing)
        } else {
            Some(Direction::Increasing)
        }
    }
}

impl FromIterator<DoseResponsePoint> for AssayDataset {
    fn from_iter<I: IntoIterator<Item = DoseResponsePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// IC50 estimation options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ic50Options {
    /// Minimum number of assay points (default: 3)
    pub min_points: usize,
    /// First concentration of the fitted curve grid (default: 0.01)
    pub curve_start: f64,
    /// Lower bound on the concentration that sets the curve range (default: 1.0)
    pub curve_min_span: f64,
    /// The curve extends to this multiple of the largest concentration (default: 1.2)
    pub curve_range_factor: f64,
    /// Number of samples on the fitted curve (default: 100)
    pub curve_points: usize,
}

impl Default for Ic50Options {
    fn default() -> Self {
        Self {
            min_points: 3,
            curve_start: 0.01,
            curve_min_span: 1.0,
            curve_range_factor: 1.2,
            curve_points: 100,
        }
    }
}

impl Ic50Options {
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    pub fn with_curve_points(mut self, points: usize) -> Self {
        self.curve_points = points;
        self
    }

    pub fn with_curve_range_factor(mut self, factor: f64) -> Self {
        self.curve_range_factor = factor;
        self
    }
}

/// Hill curve generation options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillOptions {
    /// log10 of the lowest sampled concentration (default: -3, i.e. 0.001)
    pub floor_exponent: f64,
    /// Number of samples (default: 100)
    pub points: usize,
}

impl Default for HillOptions {
    fn default() -> Self {
        Self {
            floor_exponent: -3.0,
            points: 100,
        }
    }
}

impl HillOptions {
    pub fn with_floor_exponent(mut self, exponent: f64) -> Self {
        self.floor_exponent = exponent;
        self
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }
}

// ============================================================================
// Parameters and results
// ============================================================================

/// Parameters of a four-parameter logistic (Hill) dose-response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillCurveParams {
    /// Activity at zero inhibitor (%)
    pub top: f64,
    /// Activity at saturating inhibitor (%)
    pub bottom: f64,
    /// Concentration at the curve midpoint (> 0)
    pub ic50: f64,
    /// Steepness (> 0)
    pub hill_slope: f64,
    /// Highest sampled concentration (> 0)
    pub conc_max: f64,
}

impl Default for HillCurveParams {
    fn default() -> Self {
        Self {
            top: 100.0,
            bottom: 0.0,
            ic50: 1.0,
            hill_slope: 1.0,
            conc_max: 100.0,
        }
    }
}

/// Ki obtained from an IC50
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KiResult {
    /// Inhibition constant, same units as the IC50
    pub value: f64,
    /// Mechanism whose correction was applied
    pub mechanism: Mechanism,
    pub ic50: f64,
    pub substrate_conc: f64,
    pub km: f64,
}

/// Conventional potency bands for an IC50 in µM
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Potency {
    /// < 0.1 µM
    VeryPotent,
    /// 0.1–1 µM
    Potent,
    /// 1–10 µM
    Moderate,
    /// > 10 µM
    Weak,
}

impl Potency {
    pub fn classify(ic50_um: f64) -> Self {
        if ic50_um < 0.1 {
            Potency::VeryPotent
        } else if ic50_um <= 1.0 {
            Potency::Potent
        } else if ic50_um <= 10.0 {
            Potency::Moderate
        } else {
            Potency::Weak
        }
    }
}

impl fmt::Display for Potency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Potency::VeryPotent => write!(f, "Very potent (< 0.1 µM)"),
            Potency::Potent => write!(f, "Potent (0.1-1 µM)"),
            Potency::Moderate => write!(f, "Moderate (1-10 µM)"),
            Potency::Weak => write!(f, "Weak (> 10 µM)"),
        }
    }
}

/// Dose-response warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// The assay repeats one or more concentrations
    DuplicateConcentrations {
        /// Number of repeated entries
        count: usize,
    },
    /// Bottom asymptote above top; the curve rises with concentration
    InvertedCurve { top: f64, bottom: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateConcentrations { count } => write!(
                f,
                "Duplicate concentration values detected ({} repeated); this may affect curve fitting accuracy",
                count
            ),
            Warning::InvertedCurve { top, bottom } => write!(
                f,
                "Bottom activity {:.1}% is greater than top activity {:.1}%; curve will be inverted",
                bottom, top
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arrays_length_mismatch() {
        let err = AssayDataset::from_arrays(&[1.0, 2.0], &[90.0]).unwrap_err();
        assert!(matches!(err, DoseResponseError::InvalidParameter { .. }));
    }

    #[test]
    fn test_sorted_is_stable() {
        let data = AssayDataset::default()
            .with_point(4.0, 40.0)
            .with_point(1.0, 90.0)
            .with_point(4.0, 45.0)
            .with_point(2.0, 70.0);
        let sorted = data.sorted();
        let activities: Vec<f64> = sorted.iter().map(|p| p.activity).collect();
        assert_eq!(activities, vec![90.0, 70.0, 40.0, 45.0]);
        assert_eq!(data.duplicate_count(), 1);
        assert_eq!(data.direction(), Some(Direction::Decreasing));
    }

    #[test]
    fn test_activity_range() {
        let data = AssayDataset::from_arrays(&[1.0, 2.0, 3.0], &[20.0, 80.0, 55.0]).unwrap();
        assert_eq!(data.activity_range(), Some((20.0, 80.0)));
        assert_eq!(data.max_concentration(), Some(3.0));
        assert_eq!(AssayDataset::default().activity_range(), None);
        assert_eq!(AssayDataset::default().direction(), None);
    }

    #[test]
    fn test_potency_bands() {
        assert_eq!(Potency::classify(0.05), Potency::VeryPotent);
        assert_eq!(Potency::classify(0.5), Potency::Potent);
        assert_eq!(Potency::classify(4.0), Potency::Moderate);
        assert_eq!(Potency::classify(25.0), Potency::Weak);
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::DuplicateConcentrations { count: 2 };
        assert!(w.to_string().contains("Duplicate"));
        let w = Warning::InvertedCurve {
            top: 10.0,
            bottom: 90.0,
        };
        assert!(w.to_string().contains("inverted"));
    }
}
