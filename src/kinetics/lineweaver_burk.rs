//! Lineweaver–Burk (double-reciprocal) linearization
//!
//! `1/v = (Km_app/Vmax_app)·(1/[S]) + 1/Vmax_app`
//!
//! The plot is built from a short panel of substrate concentrations rather
//! than the dense curve grid. Intercepts come from the apparent parameters:
//!
//! - y-intercept: `1/Vmax_app`
//! - x-intercept: `-1/Km_app`
//! - slope: `y_intercept / (0 - x_intercept)`
//!
//! # Mechanism signatures
//!
//! | Mechanism | Inhibited vs. uninhibited line |
//! |-----------|--------------------------------|
//! | Competitive | meet on the y-axis |
//! | Non-competitive | meet on the x-axis |
//! | Uncompetitive | parallel |
//! | Mixed | intersect off both axes |

use serde::{Deserialize, Serialize};

use super::error::KineticsError;
use super::model::KineticModel;
use crate::grid::linspace;

/// Relative tolerance used when comparing two plots
const SIGNATURE_TOLERANCE: f64 = 1e-9;

/// Options for the Lineweaver–Burk panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineweaverBurkOptions {
    /// Substrate concentrations to transform (default: 0.5, 1, 2, 4, 8, 16)
    pub panel: Vec<f64>,
    /// Number of samples on the extended line (default: 100)
    pub extension_points: usize,
}

impl Default for LineweaverBurkOptions {
    fn default() -> Self {
        Self {
            panel: vec![0.5, 1.0, 2.0, 4.0, 8.0, 16.0],
            extension_points: 100,
        }
    }
}

impl LineweaverBurkOptions {
    pub fn with_panel(mut self, panel: Vec<f64>) -> Self {
        self.panel = panel;
        self
    }

    pub fn with_extension_points(mut self, points: usize) -> Self {
        self.extension_points = points;
        self
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        if self.panel.is_empty() {
            return Err(KineticsError::InvalidParameter {
                param: "lineweaver_burk.panel".to_string(),
                value: "empty".to_string(),
            });
        }
        if let Some(&s) = self.panel.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(KineticsError::invalid("lineweaver_burk.panel", s));
        }
        Ok(())
    }
}

/// One point in the double-reciprocal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalPoint {
    /// Substrate concentration the point came from
    pub substrate: f64,
    /// `1/[S]`
    pub inv_substrate: f64,
    /// `1/v`
    pub inv_velocity: f64,
}

/// Double-reciprocal view of one kinetic model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineweaverBurkPlot {
    /// Transformed panel points, in panel order
    pub points: Vec<ReciprocalPoint>,
    /// `1/Vmax_app`
    pub y_intercept: f64,
    /// `-1/Km_app`
    pub x_intercept: f64,
    /// `Km_app/Vmax_app`
    pub slope: f64,
    /// Where `y_intercept + slope·x` reaches zero
    pub crossing: f64,
    /// Samples of `y = y_intercept + slope·x` over `[min(x_intercept, crossing), max(..)]`
    pub extension: Vec<(f64, f64)>,
}

impl LineweaverBurkPlot {
    /// The polyline drawn for the model: the x-intercept followed by every
    /// reciprocal data point
    pub fn line_points(&self) -> Vec<(f64, f64)> {
        std::iter::once((self.x_intercept, 0.0))
            .chain(self.points.iter().map(|p| (p.inv_substrate, p.inv_velocity)))
            .collect()
    }

    /// `1/v` predicted by the line at `x = 1/[S]`
    pub fn predict(&self, inv_substrate: f64) -> f64 {
        self.y_intercept + self.slope * inv_substrate
    }
}

/// Transform a model onto the double-reciprocal plane
pub fn transform(
    model: &KineticModel,
    options: &LineweaverBurkOptions,
) -> Result<LineweaverBurkPlot, KineticsError> {
    options.validate()?;

    let points = options
        .panel
        .iter()
        .map(|&s| ReciprocalPoint {
            substrate: s,
            inv_substrate: 1.0 / s,
            inv_velocity: 1.0 / model.rate(s),
        })
        .collect();

    let apparent = model.apparent();
    let y_intercept = 1.0 / apparent.apparent_vmax;
    let x_intercept = -1.0 / apparent.apparent_km;
    let slope = y_intercept / (0.0 - x_intercept);

    // A flat line never reaches y = 0; fall back to the x-intercept.
    let crossing = if slope != 0.0 {
        -y_intercept / slope
    } else {
        x_intercept
    };

    let (lo, hi) = if crossing > x_intercept {
        (x_intercept, crossing)
    } else {
        (crossing, x_intercept)
    };
    let extension = linspace(lo, hi, options.extension_points)
        .into_iter()
        .map(|x| (x, y_intercept + slope * x))
        .collect();

    Ok(LineweaverBurkPlot {
        points,
        y_intercept,
        x_intercept,
        slope,
        crossing,
        extension,
    })
}

/// How two double-reciprocal lines relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSignature {
    /// Same line
    Identical,
    /// Same y-intercept, different slope (competitive)
    MeetOnYAxis,
    /// Same x-intercept, different slope (non-competitive)
    MeetOnXAxis,
    /// Same slope, different intercepts (uncompetitive)
    Parallel,
    /// No shared slope or intercept (mixed)
    Intersecting,
}

fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() <= SIGNATURE_TOLERANCE * scale
}

/// Classify the relation between an uninhibited and an inhibited plot
pub fn compare(baseline: &LineweaverBurkPlot, inhibited: &LineweaverBurkPlot) -> LineSignature {
    let same_y = approx_eq(baseline.y_intercept, inhibited.y_intercept);
    let same_x = approx_eq(baseline.x_intercept, inhibited.x_intercept);
    let same_slope = approx_eq(baseline.slope, inhibited.slope);

    match (same_y, same_x, same_slope) {
        (true, true, _) => LineSignature::Identical,
        (true, false, _) => LineSignature::MeetOnYAxis,
        (false, true, _) => LineSignature::MeetOnXAxis,
        (false, false, true) => LineSignature::Parallel,
        (false, false, false) => LineSignature::Intersecting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::{KineticParameters, Mechanism};
    use approx::assert_relative_eq;

    fn plot(params: KineticParameters) -> LineweaverBurkPlot {
        transform(&params.model().unwrap(), &LineweaverBurkOptions::default()).unwrap()
    }

    #[test]
    fn test_intercepts_uninhibited() {
        let lb = plot(KineticParameters::new(2.0, 40.0, Mechanism::Competitive));
        assert_relative_eq!(lb.y_intercept, 1.0 / 40.0);
        assert_relative_eq!(lb.x_intercept, -0.5);
        assert_relative_eq!(lb.slope, 2.0 / 40.0, max_relative = 1e-12);
        assert_relative_eq!(lb.crossing, lb.x_intercept, max_relative = 1e-12);
    }

    #[test]
    fn test_points_lie_on_line() {
        let lb = plot(
            KineticParameters::new(1.0, 50.0, Mechanism::Mixed)
                .with_alpha(3.0)
                .with_alpha_prime(1.5),
        );
        assert_eq!(lb.points.len(), 6);
        for p in &lb.points {
            assert_relative_eq!(p.inv_velocity, lb.predict(p.inv_substrate), max_relative = 1e-10);
        }
    }

    #[test]
    fn test_line_points_start_at_x_intercept() {
        let lb = plot(KineticParameters::new(1.0, 50.0, Mechanism::Competitive));
        let line = lb.line_points();
        assert_eq!(line.len(), 7);
        assert_eq!(line[0], (lb.x_intercept, 0.0));
        assert_eq!(line[1].0, 2.0);
    }

    #[test]
    fn test_extension_spans_segment() {
        let lb = plot(KineticParameters::new(1.0, 50.0, Mechanism::Competitive));
        assert_eq!(lb.extension.len(), 100);
        let lo = lb.x_intercept.min(lb.crossing);
        let hi = lb.x_intercept.max(lb.crossing);
        assert_eq!(lb.extension.first().unwrap().0, lo);
        assert_eq!(lb.extension.last().unwrap().0, hi);
    }

    #[test]
    fn test_signatures() {
        let base = KineticParameters::new(1.0, 50.0, Mechanism::Competitive);
        let baseline = plot(base);

        let cases = [
            (Mechanism::Competitive, LineSignature::MeetOnYAxis),
            (Mechanism::NonCompetitive, LineSignature::MeetOnXAxis),
            (Mechanism::Uncompetitive, LineSignature::Parallel),
        ];
        for (mechanism, expected) in cases {
            let inhibited = plot(KineticParameters::new(1.0, 50.0, mechanism).with_alpha(3.0));
            assert_eq!(compare(&baseline, &inhibited), expected, "{}", mechanism);
        }

        let mixed = plot(
            KineticParameters::new(1.0, 50.0, Mechanism::Mixed)
                .with_alpha(3.0)
                .with_alpha_prime(2.0),
        );
        assert_eq!(compare(&baseline, &mixed), LineSignature::Intersecting);
        assert_eq!(compare(&baseline, &baseline), LineSignature::Identical);
    }

    #[test]
    fn test_rejects_bad_panel() {
        let model = KineticParameters::new(1.0, 50.0, Mechanism::Competitive)
            .model()
            .unwrap();
        let options = LineweaverBurkOptions::default().with_panel(vec![1.0, 0.0]);
        assert!(transform(&model, &options).is_err());
        let options = LineweaverBurkOptions::default().with_panel(vec![]);
        assert!(transform(&model, &options).is_err());
    }
}
