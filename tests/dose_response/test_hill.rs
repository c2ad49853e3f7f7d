//! Hill curve generator tests

use approx::assert_relative_eq;
use enzinhib::dose_response::*;

#[test]
fn test_midpoint_at_ic50() {
    for slope in [0.5, 1.0, 2.0, 4.0] {
        let params = HillCurveParams::new(100.0, 0.0, 1.0, slope, 100.0);
        assert_eq!(params.response(1.0), 50.0);
    }
}

#[test]
fn test_curve_is_monotone_and_bounded() {
    let params = HillCurveParams::new(100.0, 0.0, 1.0, 1.0, 100.0);
    let curve = generate(&params).unwrap();
    let responses: Vec<f64> = curve.responses().collect();
    assert!(responses.windows(2).all(|w| w[1] < w[0]));
    assert!(responses[0] > 99.0);
    assert!(*responses.last().unwrap() < 1.0);
    assert_eq!(curve.midpoint(), (1.0, 50.0));
}

#[test]
fn test_steeper_slope_sharper_transition() {
    let shallow = HillCurveParams::new(100.0, 0.0, 1.0, 0.5, 100.0);
    let steep = HillCurveParams::new(100.0, 0.0, 1.0, 4.0, 100.0);
    // one decade above the IC50
    assert!(steep.response(10.0) < shallow.response(10.0));
    // one decade below
    assert!(steep.response(0.1) > shallow.response(0.1));
}

#[test]
fn test_log_grid() {
    let params = HillCurveParams::new(100.0, 0.0, 1.0, 1.0, 1000.0);
    let curve = generate_with(&params, &HillOptions::default().with_points(7)).unwrap();
    let concs: Vec<f64> = curve.concentrations().collect();
    for (c, want) in concs.iter().zip([1e-3, 1e-2, 1e-1, 1.0, 10.0, 100.0, 1000.0]) {
        assert_relative_eq!(*c, want, max_relative = 1e-12);
    }
}

#[test]
fn test_inverted_curve_warns() {
    let params = HillCurveParams::new(20.0, 80.0, 1.0, 1.0, 100.0);
    let curve = generate(&params).unwrap();
    assert_eq!(
        curve.warnings,
        vec![Warning::InvertedCurve {
            top: 20.0,
            bottom: 80.0
        }]
    );
    assert_eq!(params.response(1.0), 50.0);
}

#[test]
fn test_rejects_non_positive_slope() {
    let params = HillCurveParams::new(100.0, 0.0, 1.0, -1.0, 100.0);
    assert!(matches!(
        generate(&params),
        Err(DoseResponseError::InvalidParameter { .. })
    ));
}
