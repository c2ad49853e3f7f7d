//! Cheng–Prusoff conversion of an assay IC50 into a Ki
//!
//! | Mechanism | Ki |
//! |-----------|----|
//! | Competitive | `IC50 / (1 + [S]/Km)` |
//! | Non-competitive | `IC50` |
//! | Uncompetitive | `IC50 / (1 + Km/[S])` |
//!
//! IC50, `[S]` and Km must share units. Mixed inhibition has no
//! single-constant form and is rejected.

use super::error::DoseResponseError;
use super::types::KiResult;
use crate::kinetics::Mechanism;

fn check_concentration(name: &str, value: f64) -> Result<(), DoseResponseError> {
    if value == 0.0 {
        return Err(DoseResponseError::DivisionByZero {
            context: format!("{} = 0 in Cheng-Prusoff conversion", name),
        });
    }
    if !value.is_finite() || value < 0.0 {
        return Err(DoseResponseError::invalid(name, value));
    }
    Ok(())
}

/// Convert an IC50 to Ki
///
/// # Arguments
/// * `ic50` - Measured IC50 (> 0)
/// * `substrate_conc` - Substrate concentration used in the assay (> 0)
/// * `km` - Michaelis constant of the substrate (> 0)
/// * `mechanism` - Inhibition mechanism
///
/// # Errors
/// - [`DoseResponseError::DivisionByZero`] if `substrate_conc` or `km` is zero
/// - [`DoseResponseError::InvalidParameter`] for negative or non-finite inputs,
///   or for [`Mechanism::Mixed`]
pub fn to_ki(
    ic50: f64,
    substrate_conc: f64,
    km: f64,
    mechanism: Mechanism,
) -> Result<KiResult, DoseResponseError> {
    if !ic50.is_finite() || ic50 <= 0.0 {
        return Err(DoseResponseError::invalid("ic50", ic50));
    }
    check_concentration("substrate_conc", substrate_conc)?;
    check_concentration("km", km)?;

    let value = match mechanism {
        Mechanism::Competitive => ic50 / (1.0 + substrate_conc / km),
        Mechanism::NonCompetitive => ic50,
        Mechanism::Uncompetitive => ic50 / (1.0 + km / substrate_conc),
        Mechanism::Mixed => {
            return Err(DoseResponseError::InvalidParameter {
                param: "mechanism".to_string(),
                value: "mixed inhibition has no single-constant Cheng-Prusoff form".to_string(),
            })
        }
    };

    tracing::debug!(ic50, substrate_conc, km, %mechanism, ki = value, "converted IC50 to Ki");

    Ok(KiResult {
        value,
        mechanism,
        ic50,
        substrate_conc,
        km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_competitive_reference() {
        let ki = to_ki(5.0, 10.0, 5.0, Mechanism::Competitive).unwrap();
        assert_relative_eq!(ki.value, 5.0 / 3.0, epsilon = 1e-12);
        assert!((ki.value - 1.667).abs() < 0.001);
    }

    #[test]
    fn test_uncompetitive() {
        let ki = to_ki(6.0, 10.0, 5.0, Mechanism::Uncompetitive).unwrap();
        assert_relative_eq!(ki.value, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_inputs() {
        assert!(matches!(
            to_ki(5.0, 0.0, 5.0, Mechanism::Competitive),
            Err(DoseResponseError::DivisionByZero { .. })
        ));
        assert!(matches!(
            to_ki(5.0, 10.0, 0.0, Mechanism::Uncompetitive),
            Err(DoseResponseError::DivisionByZero { .. })
        ));
        assert!(matches!(
            to_ki(0.0, 10.0, 5.0, Mechanism::Competitive),
            Err(DoseResponseError::InvalidParameter { .. })
        ));
        assert!(matches!(
            to_ki(5.0, -1.0, 5.0, Mechanism::Competitive),
            Err(DoseResponseError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_mixed_rejected() {
        assert!(to_ki(5.0, 10.0, 5.0, Mechanism::Mixed).is_err());
    }
}
