//! Inhibition Mechanisms Example
//!
//! Compares the four reversible inhibition mechanisms for one enzyme and
//! prints their apparent parameters and Lineweaver–Burk signatures.
//!
//! Run with: `cargo run --example mechanisms`

use enzinhib::prelude::*;

fn main() -> Result<(), EnzinhibError> {
    println!("=== enzinhib Mechanisms Example ===\n");

    let options = EngineOptions::default();
    let inhibitor = Inhibitor::new(2.0, 1.0);
    let alpha = inhibitor.alpha()?;
    println!("[I] = 2.0 µM, Ki = 1.0 µM  →  α = {:.2}\n", alpha);

    for mechanism in Mechanism::ALL {
        let params = KineticParameters::new(1.0, 50.0, mechanism)
            .with_inhibitor(&inhibitor)?
            // Mixed inhibition needs its own α′
            .with_alpha_prime(2.0);

        let report = options.analyze_kinetics(&params)?;
        println!("--- {} ---", mechanism);
        println!(
            "  Km:   {:.3} → {:.3} mM",
            report.baseline.apparent_km, report.inhibited.apparent_km
        );
        println!(
            "  Vmax: {:.2} → {:.2} µmol/min",
            report.baseline.apparent_vmax, report.inhibited.apparent_vmax
        );
        println!(
            "  LB:   1/Vmax = {:.4}, -1/Km = {:.4}, slope = {:.4}",
            report.lb_inhibited.y_intercept,
            report.lb_inhibited.x_intercept,
            report.lb_inhibited.slope
        );
        println!("  Signature: {:?}\n", report.signature);
    }

    Ok(())
}
