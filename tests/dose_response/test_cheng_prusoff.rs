//! Cheng–Prusoff conversion tests

use approx::assert_relative_eq;
use enzinhib::dose_response::*;
use enzinhib::Mechanism;

#[test]
fn test_competitive_example() {
    // Ki = 5 / (1 + 10/5)
    let ki = to_ki(5.0, 10.0, 5.0, Mechanism::Competitive).unwrap();
    assert_relative_eq!(ki.value, 1.667, epsilon = 0.001);
    assert_eq!(ki.mechanism, Mechanism::Competitive);
}

#[test]
fn test_noncompetitive_is_identity() {
    for ic50 in [0.01, 0.37, 5.0, 123.456] {
        let ki = to_ki(ic50, 10.0, 5.0, Mechanism::NonCompetitive).unwrap();
        assert_eq!(ki.value, ic50);
    }
}

#[test]
fn test_ki_never_exceeds_ic50() {
    for s in [0.1, 1.0, 10.0, 100.0] {
        for km in [0.05, 1.0, 20.0] {
            let comp = to_ki(8.0, s, km, Mechanism::Competitive).unwrap();
            let uncomp = to_ki(8.0, s, km, Mechanism::Uncompetitive).unwrap();
            assert!(comp.value <= 8.0);
            assert!(uncomp.value <= 8.0);
        }
    }
}

#[test]
fn test_low_substrate_limits() {
    // [S] << Km: competitive Ki approaches IC50, uncompetitive Ki approaches 0
    let comp = to_ki(10.0, 1e-6, 1.0, Mechanism::Competitive).unwrap();
    let uncomp = to_ki(10.0, 1e-6, 1.0, Mechanism::Uncompetitive).unwrap();
    assert_relative_eq!(comp.value, 10.0, max_relative = 1e-5);
    assert!(uncomp.value < 1e-4);
}

#[test]
fn test_errors() {
    assert!(matches!(
        to_ki(5.0, 0.0, 5.0, Mechanism::Competitive),
        Err(DoseResponseError::DivisionByZero { .. })
    ));
    assert!(matches!(
        to_ki(-5.0, 10.0, 5.0, Mechanism::NonCompetitive),
        Err(DoseResponseError::InvalidParameter { .. })
    ));
    assert!(matches!(
        to_ki(5.0, 10.0, f64::NAN, Mechanism::Competitive),
        Err(DoseResponseError::InvalidParameter { .. })
    ));
}
