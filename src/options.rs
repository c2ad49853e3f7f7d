//! Engine-wide configuration
//!
//! [`EngineOptions`] groups the sampling and estimation settings of every
//! component. The defaults reproduce the standard display: a 0.1–20 substrate
//! range with 100 samples, a six-point Lineweaver–Burk panel, a 100-point
//! fitted IC50 curve and a 100-point Hill curve starting at 10⁻³.
//!
//! Options can be loaded from JSON; missing fields keep their defaults.
//!
//! ```rust
//! use enzinhib::EngineOptions;
//!
//! let options = EngineOptions::from_json(r#"{ "sampler": { "end": 50.0 } }"#).unwrap();
//! assert_eq!(options.sampler.end, 50.0);
//! assert_eq!(options.sampler.points, 100);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dose_response::{
    self, AssayDataset, DoseResponseError, HillCurve, HillCurveParams, HillOptions, Ic50Estimate,
    Ic50Options,
};
use crate::kinetics::{
    self, KineticParameters, KineticsError, KineticsReport, LineweaverBurkOptions,
    LineweaverBurkPlot, SamplerOptions,
};
use crate::EnzinhibError;

/// Configuration for every engine component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Michaelis–Menten curve sampling
    pub sampler: SamplerOptions,
    /// Lineweaver–Burk panel
    pub lineweaver_burk: LineweaverBurkOptions,
    /// IC50 estimation and fitted-curve sampling
    pub ic50: Ic50Options,
    /// Theoretical Hill curve sampling
    pub hill: HillOptions,
}

impl EngineOptions {
    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self, EnzinhibError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EnzinhibError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let options = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "loaded engine options");
        Ok(options)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, EnzinhibError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_sampler(mut self, sampler: SamplerOptions) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_lineweaver_burk(mut self, lineweaver_burk: LineweaverBurkOptions) -> Self {
        self.lineweaver_burk = lineweaver_burk;
        self
    }

    pub fn with_ic50(mut self, ic50: Ic50Options) -> Self {
        self.ic50 = ic50;
        self
    }

    pub fn with_hill(mut self, hill: HillOptions) -> Self {
        self.hill = hill;
        self
    }

    // ------------------------------------------------------------------------
    // Entry points using these options
    // ------------------------------------------------------------------------

    /// Baseline vs. inhibited kinetics for `params`
    pub fn analyze_kinetics(
        &self,
        params: &KineticParameters,
    ) -> Result<KineticsReport, KineticsError> {
        kinetics::analyze(params, &self.sampler, &self.lineweaver_burk)
    }

    /// Lineweaver–Burk plot for `params`
    pub fn lineweaver_burk(
        &self,
        params: &KineticParameters,
    ) -> Result<LineweaverBurkPlot, KineticsError> {
        kinetics::lineweaver_burk::transform(&params.model()?, &self.lineweaver_burk)
    }

    /// IC50 of an assay
    pub fn estimate_ic50(&self, dataset: &AssayDataset) -> Result<Ic50Estimate, DoseResponseError> {
        dose_response::estimate_with(dataset, &self.ic50)
    }

    /// Theoretical Hill curve
    pub fn hill_curve(&self, params: &HillCurveParams) -> Result<HillCurve, DoseResponseError> {
        dose_response::generate_with(params, &self.hill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::{Mechanism, Spacing};

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.sampler.start, 0.1);
        assert_eq!(options.sampler.end, 20.0);
        assert_eq!(options.lineweaver_burk.panel, vec![0.5, 1.0, 2.0, 4.0, 8.0, 16.0]);
        assert_eq!(options.ic50.min_points, 3);
        assert_eq!(options.hill.floor_exponent, -3.0);
    }

    #[test]
    fn test_partial_json() {
        let options = EngineOptions::from_json(
            r#"{
                "sampler": { "spacing": "log", "start": 0.01 },
                "lineweaver_burk": { "panel": [0.5, 1, 2, 4, 8, 16, 32] },
                "hill": { "points": 50 }
            }"#,
        )
        .unwrap();
        assert_eq!(options.sampler.spacing, Spacing::Log);
        assert_eq!(options.sampler.start, 0.01);
        assert_eq!(options.sampler.end, 20.0);
        assert_eq!(options.lineweaver_burk.panel.len(), 7);
        assert_eq!(options.lineweaver_burk.extension_points, 100);
        assert_eq!(options.hill.points, 50);
        assert_eq!(options.ic50, Ic50Options::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let options = EngineOptions::default().with_hill(HillOptions::default().with_points(25));
        let json = options.to_json().unwrap();
        assert_eq!(EngineOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            EngineOptions::from_json("{ not json"),
            Err(EnzinhibError::Options(_))
        ));
    }

    #[test]
    fn test_entry_points_use_options() {
        let options = EngineOptions::default()
            .with_sampler(SamplerOptions::default().with_points(10))
            .with_lineweaver_burk(LineweaverBurkOptions::default().with_panel(vec![1.0, 2.0]));
        let params = KineticParameters::new(1.0, 50.0, Mechanism::NonCompetitive).with_alpha(2.0);

        let report = options.analyze_kinetics(&params).unwrap();
        assert_eq!(report.mm_inhibited.len(), 10);
        assert_eq!(options.lineweaver_burk(&params).unwrap().points.len(), 2);
    }
}
