//! Michaelis–Menten curve sampling
//!
//! [`CurveSampler`] is a lazy, finite iterator of `(S, v)` pairs over a
//! substrate range. It is `Clone`, so a sampler can be restarted by cloning
//! it before iteration (or by calling [`CurveSampler::restart`]).
//!
//! The grid never contains `S = 0`: the range starts at a strictly positive
//! substrate concentration.

use serde::{Deserialize, Serialize};

use super::error::KineticsError;
use super::model::{KineticModel, KineticParameters};
use crate::grid::linspace_at;

/// Spacing of the sampled substrate grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Linear,
    Log,
}

/// Substrate range for velocity curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerOptions {
    /// First substrate concentration (> 0, default: 0.1)
    pub start: f64,
    /// Last substrate concentration (default: 20.0)
    pub end: f64,
    /// Number of samples (default: 100)
    pub points: usize,
    /// Grid spacing (default: Linear)
    pub spacing: Spacing,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            start: 0.1,
            end: 20.0,
            points: 100,
            spacing: Spacing::Linear,
        }
    }
}

impl SamplerOptions {
    /// Span from the default start up to `factor` times the largest
    /// concentration of interest
    pub fn spanning(max_conc: f64, factor: f64) -> Self {
        Self {
            end: max_conc * factor,
            ..Default::default()
        }
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: f64) -> Self {
        self.end = end;
        self
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        if !self.start.is_finite() || self.start <= 0.0 {
            return Err(KineticsError::invalid("sampler.start", self.start));
        }
        if !self.end.is_finite() || self.end <= self.start {
            return Err(KineticsError::invalid("sampler.end", self.end));
        }
        if self.points < 2 {
            return Err(KineticsError::InvalidParameter {
                param: "sampler.points".to_string(),
                value: self.points.to_string(),
            });
        }
        Ok(())
    }

    /// Substrate concentration of sample `i`
    fn substrate_at(&self, i: usize) -> f64 {
        match self.spacing {
            Spacing::Linear => linspace_at(self.start, self.end, self.points, i),
            Spacing::Log => 10f64.powf(linspace_at(
                self.start.log10(),
                self.end.log10(),
                self.points,
                i,
            )),
        }
    }
}

/// Lazy iterator of `(S, v)` pairs
#[derive(Debug, Clone)]
pub struct CurveSampler {
    model: KineticModel,
    options: SamplerOptions,
    index: usize,
}

impl CurveSampler {
    pub fn new(model: KineticModel, options: &SamplerOptions) -> Result<Self, KineticsError> {
        options.validate()?;
        Ok(Self {
            model,
            options: *options,
            index: 0,
        })
    }

    pub fn model(&self) -> &KineticModel {
        &self.model
    }

    /// Rewind to the first sample
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for CurveSampler {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.options.points {
            return None;
        }
        let s = self.options.substrate_at(self.index);
        self.index += 1;
        Some((s, self.model.rate(s)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.options.points.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSampler {}

/// Sample a single curve
pub fn sample(
    params: &KineticParameters,
    options: &SamplerOptions,
) -> Result<CurveSampler, KineticsError> {
    CurveSampler::new(params.model()?, options)
}

/// Sample the uninhibited and the inhibited curve over the same grid
///
/// Returns `(baseline, inhibited)`.
pub fn sample_pair(
    params: &KineticParameters,
    options: &SamplerOptions,
) -> Result<(CurveSampler, CurveSampler), KineticsError> {
    let baseline = sample(&params.baseline(), options)?;
    let inhibited = sample(params, options)?;
    Ok((baseline, inhibited))
}
