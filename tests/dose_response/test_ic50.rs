//! IC50 estimation tests
//!
//! Tests cover:
//! - exact hits and interpolation between assay points
//! - decreasing and increasing datasets
//! - out-of-range and duplicate handling

use approx::assert_relative_eq;
use enzinhib::dose_response::*;
use enzinhib::EngineOptions;

#[test]
fn test_point_at_half_activity() {
    let data = AssayDataset::from_arrays(&[1.0, 2.0, 4.0, 8.0, 16.0], &[90.0, 70.0, 50.0, 30.0, 10.0])
        .unwrap();
    let result = estimate(&data).unwrap();
    assert_eq!(result.value(), 4.0);
    assert_eq!(format!("{:.2}", result.ic50), "4.00");
}

#[test]
fn test_linear_interpolation_between_points() {
    // 50% lies halfway between (2, 80) and (4, 20)
    let data = AssayDataset::from_arrays(&[1.0, 2.0, 4.0, 8.0], &[95.0, 80.0, 20.0, 5.0]).unwrap();
    let result = estimate(&data).unwrap();
    assert_relative_eq!(result.ic50, 3.0, epsilon = 1e-12);
    assert_eq!(result.sorted.len(), 4);
}

#[test]
fn test_potent_inhibitor() {
    let data =
        AssayDataset::from_arrays(&[0.01, 0.03, 0.1, 0.3, 1.0], &[98.0, 85.0, 52.0, 20.0, 4.0])
            .unwrap();
    let result = estimate(&data).unwrap();
    assert!(result.ic50 > 0.1 && result.ic50 < 0.3);
    assert_eq!(result.potency, Potency::Potent);
}

#[test]
fn test_zero_concentration_control() {
    let data = AssayDataset::from_arrays(&[0.0, 1.0, 10.0, 100.0], &[100.0, 80.0, 45.0, 8.0]).unwrap();
    let result = estimate(&data).unwrap();
    assert!(result.ic50 > 1.0 && result.ic50 < 10.0);
    assert_eq!(result.top, 100.0);
    assert_eq!(result.bottom, 8.0);
}

#[test]
fn test_out_of_range_reports_observed_bounds() {
    let data = AssayDataset::from_arrays(&[1.0, 2.0, 4.0, 8.0], &[99.0, 95.0, 88.0, 70.0]).unwrap();
    let err = estimate(&data).unwrap_err();
    assert_eq!(err, DoseResponseError::OutOfRange { min: 70.0, max: 99.0 });
    assert!(err.to_string().contains("70.0% to 99.0%"));
}

#[test]
fn test_duplicate_concentrations_warn() {
    let data = AssayDataset::default()
        .with_point(1.0, 90.0)
        .with_point(1.0, 88.0)
        .with_point(5.0, 40.0)
        .with_point(5.0, 42.0)
        .with_point(10.0, 15.0);
    let result = estimate(&data).unwrap();
    assert!(result.has_warnings());
    assert_eq!(result.warnings[0], Warning::DuplicateConcentrations { count: 2 });
}

#[test]
fn test_options_control_fitted_curve() {
    let options = EngineOptions::default().with_ic50(
        Ic50Options::default()
            .with_curve_points(20)
            .with_curve_range_factor(2.0),
    );
    let data = AssayDataset::from_arrays(&[1.0, 2.0, 4.0, 8.0], &[95.0, 80.0, 20.0, 5.0]).unwrap();
    let curve = options.estimate_ic50(&data).unwrap().fitted_curve();
    assert_eq!(curve.len(), 20);
    assert_relative_eq!(curve.last().unwrap().0, 16.0);
}
