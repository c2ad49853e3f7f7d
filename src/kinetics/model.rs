//! Forward models for reversible enzyme inhibition
//!
//! Each [`Mechanism`] maps the uninhibited Michaelis–Menten parameters
//! (`Km`, `Vmax`) and the inhibitor strength factors (`α`, `α′`) to a pair of
//! apparent parameters and a velocity law.
//!
//! | Mechanism | v(S) | apparent Km | apparent Vmax |
//! |-----------|------|-------------|---------------|
//! | Competitive | `Vmax·S / (Km·α + S)` | `Km·α` | `Vmax` |
//! | Non-competitive | `(Vmax/α)·S / (Km + S)` | `Km` | `Vmax/α` |
//! | Uncompetitive | `(Vmax/α)·S / (Km/α + S)` | `Km/α` | `Vmax/α` |
//! | Mixed | `(Vmax/α′)·S / (Km·α/α′ + S)` | `Km·α/α′` | `Vmax/α′` |
//!
//! With `α = 1` (and `α′ = 1` for mixed inhibition) every mechanism reduces to
//! the uninhibited rate law `Vmax·S / (Km + S)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::KineticsError;

// ============================================================================
// Mechanism
// ============================================================================

/// Reversible inhibition mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanism {
    /// Inhibitor binds the free enzyme only; raises apparent Km
    Competitive,
    /// Inhibitor binds free enzyme and ES complex equally; lowers apparent Vmax
    NonCompetitive,
    /// Inhibitor binds the ES complex only; lowers Km and Vmax proportionally
    Uncompetitive,
    /// Inhibitor binds both forms with different affinities (α ≠ α′)
    Mixed,
}

impl Mechanism {
    /// All mechanisms, in display order
    pub const ALL: [Mechanism; 4] = [
        Mechanism::Competitive,
        Mechanism::NonCompetitive,
        Mechanism::Uncompetitive,
        Mechanism::Mixed,
    ];

    /// Whether the mechanism needs an independent `α′`
    pub fn uses_alpha_prime(&self) -> bool {
        matches!(self, Mechanism::Mixed)
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mechanism::Competitive => "Competitive Inhibition",
            Mechanism::NonCompetitive => "Non-competitive Inhibition",
            Mechanism::Uncompetitive => "Uncompetitive Inhibition",
            Mechanism::Mixed => "Mixed Inhibition",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Mechanism {
    type Err = KineticsError;

    /// Accepts the display labels as well as short forms such as
    /// `"competitive"`, `"non_competitive"` or `"noncompetitive"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .trim_end_matches("inhibition")
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match key.as_str() {
            "competitive" => Ok(Mechanism::Competitive),
            "noncompetitive" => Ok(Mechanism::NonCompetitive),
            "uncompetitive" => Ok(Mechanism::Uncompetitive),
            "mixed" => Ok(Mechanism::Mixed),
            _ => Err(KineticsError::InvalidParameter {
                param: "mechanism".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Inhibitor strength
// ============================================================================

/// Inhibitor strength factor `α = 1 + [I]/Ki`
///
/// # Errors
/// - [`KineticsError::DivisionByZero`] if `ki == 0`
/// - [`KineticsError::InvalidParameter`] if either input is negative or non-finite
pub fn alpha_from_inhibitor(inhibitor_conc: f64, ki: f64) -> Result<f64, KineticsError> {
    if !inhibitor_conc.is_finite() || inhibitor_conc < 0.0 {
        return Err(KineticsError::invalid("inhibitor_conc", inhibitor_conc));
    }
    if ki == 0.0 {
        return Err(KineticsError::DivisionByZero {
            context: "alpha = 1 + [I]/Ki with Ki = 0".to_string(),
        });
    }
    if !ki.is_finite() || ki < 0.0 {
        return Err(KineticsError::invalid("ki", ki));
    }
    Ok(1.0 + inhibitor_conc / ki)
}

/// An inhibitor at a given concentration with a known dissociation constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inhibitor {
    /// Inhibitor concentration `[I]`
    pub concentration: f64,
    /// Dissociation constant of the enzyme–inhibitor complex
    pub ki: f64,
}

impl Inhibitor {
    pub fn new(concentration: f64, ki: f64) -> Self {
        Self { concentration, ki }
    }

    /// `α = 1 + [I]/Ki`
    pub fn alpha(&self) -> Result<f64, KineticsError> {
        alpha_from_inhibitor(self.concentration, self.ki)
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Base kinetic parameters plus the inhibition applied to them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticParameters {
    /// Michaelis constant (> 0)
    pub km: f64,
    /// Maximum velocity (> 0)
    pub vmax: f64,
    /// Inhibition mechanism
    pub mechanism: Mechanism,
    /// Inhibitor strength factor (≥ 1)
    pub alpha: f64,
    /// Independent strength factor for the non-competitive component of
    /// mixed inhibition (≥ 1). Ignored by the other mechanisms.
    pub alpha_prime: Option<f64>,
}

impl KineticParameters {
    /// Parameters for the given mechanism with `α = 1` and no `α′`
    ///
    /// [`Mechanism::Mixed`] still needs [`with_alpha_prime`](Self::with_alpha_prime)
    /// before [`model`](Self::model) succeeds; [`uninhibited`](Self::uninhibited)
    /// sets both factors for any mechanism.
    pub fn new(km: f64, vmax: f64, mechanism: Mechanism) -> Self {
        Self {
            km,
            vmax,
            mechanism,
            alpha: 1.0,
            alpha_prime: None,
        }
    }

    /// The uninhibited enzyme (`α = α′ = 1`), valid for every mechanism
    pub fn uninhibited(km: f64, vmax: f64, mechanism: Mechanism) -> Self {
        Self {
            km,
            vmax,
            mechanism,
            alpha: 1.0,
            alpha_prime: Some(1.0),
        }
    }

    /// Set the inhibitor strength factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the mixed-inhibition factor `α′`
    pub fn with_alpha_prime(mut self, alpha_prime: f64) -> Self {
        self.alpha_prime = Some(alpha_prime);
        self
    }

    /// Derive `α` from an inhibitor concentration and Ki
    pub fn with_inhibitor(mut self, inhibitor: &Inhibitor) -> Result<Self, KineticsError> {
        self.alpha = inhibitor.alpha()?;
        Ok(self)
    }

    /// The same enzyme with the inhibitor removed
    pub fn baseline(&self) -> Self {
        Self {
            alpha: 1.0,
            alpha_prime: self.alpha_prime.map(|_| 1.0),
            ..*self
        }
    }

    /// Check the admissible ranges of every parameter the mechanism uses
    pub fn validate(&self) -> Result<(), KineticsError> {
        if !self.km.is_finite() || self.km <= 0.0 {
            return Err(KineticsError::invalid("km", self.km));
        }
        if !self.vmax.is_finite() || self.vmax <= 0.0 {
            return Err(KineticsError::invalid("vmax", self.vmax));
        }
        if !self.alpha.is_finite() || self.alpha < 1.0 {
            return Err(KineticsError::invalid("alpha", self.alpha));
        }
        if self.mechanism.uses_alpha_prime() {
            match self.alpha_prime {
                Some(ap) if ap.is_finite() && ap >= 1.0 => {}
                Some(ap) => return Err(KineticsError::invalid("alpha_prime", ap)),
                None => {
                    return Err(KineticsError::InvalidParameter {
                        param: "alpha_prime".to_string(),
                        value: "missing (required for mixed inhibition)".to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Validate and build the velocity model
    pub fn model(&self) -> Result<KineticModel, KineticsError> {
        KineticModel::new(*self)
    }

    /// `α′` resolved for the active mechanism (1 when unused)
    fn effective_alpha_prime(&self) -> f64 {
        match self.mechanism {
            Mechanism::Mixed => self.alpha_prime.unwrap_or(1.0),
            _ => 1.0,
        }
    }
}

/// Apparent Michaelis–Menten parameters under inhibition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentParameters {
    pub apparent_km: f64,
    pub apparent_vmax: f64,
}

impl ApparentParameters {
    /// Slope of the Lineweaver–Burk line, `Km_app / Vmax_app`
    pub fn lb_slope(&self) -> f64 {
        self.apparent_km / self.apparent_vmax
    }

    /// Half of the apparent maximum velocity
    pub fn half_vmax(&self) -> f64 {
        self.apparent_vmax / 2.0
    }
}

/// Compute apparent parameters for a mechanism
///
/// # Arguments
/// * `km`, `vmax` - Uninhibited parameters (> 0)
/// * `mechanism` - Inhibition mechanism
/// * `alpha` - Inhibitor strength factor (≥ 1)
/// * `alpha_prime` - Required for [`Mechanism::Mixed`], ignored otherwise
pub fn evaluate(
    km: f64,
    vmax: f64,
    mechanism: Mechanism,
    alpha: f64,
    alpha_prime: Option<f64>,
) -> Result<ApparentParameters, KineticsError> {
    let params = KineticParameters {
        km,
        vmax,
        mechanism,
        alpha,
        alpha_prime,
    };
    Ok(params.model()?.apparent())
}

// ============================================================================
// Model
// ============================================================================

/// A validated kinetic model ready to produce velocities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticModel {
    params: KineticParameters,
    apparent: ApparentParameters,
}

impl KineticModel {
    pub fn new(params: KineticParameters) -> Result<Self, KineticsError> {
        params.validate()?;

        let KineticParameters { km, vmax, alpha, .. } = params;
        let apparent = match params.mechanism {
            Mechanism::Competitive => ApparentParameters {
                apparent_km: km * alpha,
                apparent_vmax: vmax,
            },
            Mechanism::NonCompetitive => ApparentParameters {
                apparent_km: km,
                apparent_vmax: vmax / alpha,
            },
            Mechanism::Uncompetitive => ApparentParameters {
                apparent_km: km / alpha,
                apparent_vmax: vmax / alpha,
            },
            Mechanism::Mixed => {
                let alpha_prime = params.effective_alpha_prime();
                ApparentParameters {
                    apparent_km: km * alpha / alpha_prime,
                    apparent_vmax: vmax / alpha_prime,
                }
            }
        };

        tracing::debug!(
            mechanism = %params.mechanism,
            alpha = alpha,
            apparent_km = apparent.apparent_km,
            apparent_vmax = apparent.apparent_vmax,
            "evaluated kinetic model"
        );

        Ok(Self { params, apparent })
    }

    pub fn params(&self) -> &KineticParameters {
        &self.params
    }

    pub fn apparent(&self) -> ApparentParameters {
        self.apparent
    }

    /// Reaction velocity at substrate concentration `s`
    ///
    /// # Errors
    /// [`KineticsError::InvalidParameter`] if `s` is negative or non-finite.
    pub fn velocity(&self, s: f64) -> Result<f64, KineticsError> {
        if !s.is_finite() || s < 0.0 {
            return Err(KineticsError::invalid("substrate", s));
        }
        Ok(self.rate(s))
    }

    /// Velocity of the same enzyme without inhibitor
    pub fn baseline_velocity(&self, s: f64) -> Result<f64, KineticsError> {
        if !s.is_finite() || s < 0.0 {
            return Err(KineticsError::invalid("substrate", s));
        }
        Ok(michaelis_menten(self.params.vmax, self.params.km, s))
    }

    /// Rate law without input checks; `s` must already be validated
    pub(crate) fn rate(&self, s: f64) -> f64 {
        let KineticParameters { km, vmax, alpha, .. } = self.params;
        match self.params.mechanism {
            Mechanism::Competitive => vmax * s / (km * alpha + s),
            Mechanism::NonCompetitive => (vmax / alpha) * s / (km + s),
            Mechanism::Uncompetitive => (vmax / alpha) * s / (km / alpha + s),
            Mechanism::Mixed => {
                let alpha_prime = self.params.effective_alpha_prime();
                (vmax / alpha_prime) * s / ((km * alpha / alpha_prime) + s)
            }
        }
    }
}

/// Uninhibited Michaelis–Menten rate law
#[inline]
pub fn michaelis_menten(vmax: f64, km: f64, s: f64) -> f64 {
    vmax * s / (km + s)
}
