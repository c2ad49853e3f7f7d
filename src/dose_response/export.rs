//! CSV export of IC50 results
//!
//! One row per assay point, sorted by concentration, with the estimated IC50
//! repeated on every row:
//!
//! ```text
//! Concentration_uM,Activity_percent,IC50_uM
//! 1.0,90.0,4.0
//! 2.0,70.0,4.0
//! ```
//!
//! Numbers use the shortest round-trip digits. Magnitudes below `1e-4` or
//! from `1e16` upward switch to exponent form with a signed two-digit
//! exponent (`1e-05`, `2.5e+16`), and integral values keep a trailing `.0`.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use super::ic50::Ic50Estimate;
use crate::EnzinhibError;

/// Default file name offered for downloads
pub const DEFAULT_FILE_NAME: &str = "ic50_results.csv";

#[derive(Debug, Clone, Serialize)]
struct Ic50Record {
    #[serde(rename = "Concentration_uM")]
    concentration_um: String,
    #[serde(rename = "Activity_percent")]
    activity_percent: String,
    #[serde(rename = "IC50_uM")]
    ic50_um: String,
}

/// Shortest round-trip rendering, fixed for exponents in `-4..16`
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return String::new();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{:e}", x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let fixed = x.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Write the export to any writer
pub fn write_csv<W: io::Write>(estimate: &Ic50Estimate, writer: W) -> Result<(), EnzinhibError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for point in &estimate.sorted {
        wtr.serialize(Ic50Record {
            concentration_um: format_float(point.concentration),
            activity_percent: format_float(point.activity),
            ic50_um: format_float(estimate.ic50),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the export as a string
pub fn to_csv_string(estimate: &Ic50Estimate) -> Result<String, EnzinhibError> {
    let mut buf = Vec::new();
    write_csv(estimate, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the export to a file, replacing any existing one
pub fn write_csv_file(estimate: &Ic50Estimate, path: impl AsRef<Path>) -> Result<(), EnzinhibError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(estimate, file)?;
    tracing::debug!(path = %path.display(), rows = estimate.sorted.len(), "wrote IC50 export");
    Ok(())
}
