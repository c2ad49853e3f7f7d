//! CSV export tests

use enzinhib::dose_response::*;

fn result() -> Ic50Estimate {
    let data = AssayDataset::from_arrays(&[16.0, 1.0, 8.0, 2.0, 4.0], &[10.0, 90.0, 30.0, 70.0, 50.0])
        .unwrap();
    estimate(&data).unwrap()
}

#[test]
fn test_exact_output() {
    let csv = to_csv_string(&result()).unwrap();
    let expected = "\
Concentration_uM,Activity_percent,IC50_uM
1.0,90.0,4.0
2.0,70.0,4.0
4.0,50.0,4.0
8.0,30.0,4.0
16.0,10.0,4.0
";
    assert_eq!(csv, expected);
}

#[test]
fn test_write_file_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    write_csv_file(&result(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Concentration_uM", "Activity_percent", "IC50_uM"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    let concs: Vec<f64> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
    assert_eq!(concs, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
}
