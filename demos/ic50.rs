//! IC50 / Ki Calculator Example
//!
//! Estimates an IC50 from assay data, converts it to Ki for each mechanism,
//! writes the CSV export and generates a theoretical Hill curve.
//!
//! Run with: `cargo run --example ic50`

use enzinhib::dose_response::{write_csv, DEFAULT_FILE_NAME};
use enzinhib::prelude::*;

fn main() -> Result<(), EnzinhibError> {
    println!("=== enzinhib IC50 Example ===\n");

    ic50_example()?;
    hill_example()?;
    out_of_range_example();

    Ok(())
}

fn ic50_example() -> Result<(), EnzinhibError> {
    println!("--- IC50 Calculator ---\n");

    let data = AssayDataset::from_arrays(
        &[2.0, 4.0, 6.0, 8.0, 10.0],
        &[100.0, 82.0, 64.0, 46.0, 28.0],
    )?;

    let result = estimate(&data)?;
    println!("IC50 = {:.2} µM ({})", result.ic50, result.potency);
    for warning in &result.warnings {
        println!("  warning: {}", warning);
    }

    println!("\nCheng-Prusoff ([S] = 10 µM, Km = 5 µM):");
    for mechanism in [
        Mechanism::Competitive,
        Mechanism::NonCompetitive,
        Mechanism::Uncompetitive,
    ] {
        let ki = to_ki(result.ic50, 10.0, 5.0, mechanism)?;
        println!("  {:<28} Ki = {:.3} µM", mechanism.to_string(), ki.value);
    }

    println!("\n{} :", DEFAULT_FILE_NAME);
    write_csv(&result, std::io::stdout())?;
    println!();
    Ok(())
}

fn hill_example() -> Result<(), EnzinhibError> {
    println!("--- Theoretical Dose-Response Curve ---\n");

    let params = HillCurveParams::new(100.0, 0.0, 1.0, 1.5, 100.0);
    let curve = generate(&params)?;
    let (ic50, level) = curve.midpoint();
    println!("Midpoint: {:.1}% at {} µM", level, ic50);

    for (c, r) in curve.points.iter().step_by(20) {
        println!("  {:>10.4} µM  {:>6.2}%", c, r);
    }
    println!();
    Ok(())
}

fn out_of_range_example() {
    println!("--- Data that never crosses 50% ---\n");

    let data = AssayDataset::default()
        .with_point(1.0, 98.0)
        .with_point(3.0, 91.0)
        .with_point(10.0, 77.0);

    match estimate(&data) {
        Ok(result) => println!("IC50 = {:.2} µM", result.ic50),
        Err(e) => println!("{}", e),
    }
}
