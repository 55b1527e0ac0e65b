//! A price CSV on disk flows through to a computed `Stock`.

use std::io::Write;

use hffe_md::load_stock;
use hffe_stats::{JumpThreshold, StockSource};

const REFERENCE_CSV: &str = "\
20200101,901,1.0
20200101,915,1.01
20200101,930,1.02
20200101,945,1.01
20200101,1000,1.00
20200102,0901,2.0
20200102,0915,2.02
20200102,0930,2.00
20200102,0945,2.01
20200102,1000,2.03
";

fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn scenario_reference_csv_loads_and_analyzes() {
    let f = write_tmp(REFERENCE_CSV);
    let stock = load_stock(f.path(), JumpThreshold::default()).unwrap();

    assert_eq!(stock.total.prices, 5);
    assert_eq!(stock.total.days, 2);
    assert_eq!(stock.total.jumps, 0);
    assert_eq!(stock.source, StockSource::Csv(f.path().to_path_buf()));
    assert!(stock.to_string().starts_with("Stock(csv:"));
}

#[test]
fn scenario_uneven_days_surface_as_error_with_path_context() {
    // Drop the last observation of day two.
    let truncated: String = REFERENCE_CSV.lines().take(9).map(|l| format!("{l}\n")).collect();
    let f = write_tmp(&truncated);

    let err = load_stock(f.path(), JumpThreshold::default()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("analyze price series"), "{chain}");
    assert!(chain.contains("non-rectangular"), "{chain}");
}

#[test]
fn scenario_malformed_row_is_fatal() {
    let f = write_tmp("20200101,901,1.0\n20200101,915,oops\n");
    let err = load_stock(f.path(), JumpThreshold::default()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("load price series"), "{chain}");
    assert!(chain.contains("oops"), "{chain}");
}

#[test]
fn scenario_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_stock(&dir.path().join("absent.csv"), JumpThreshold::default()).unwrap_err();
    assert!(format!("{err:#}").contains("csv io error"));
}

#[test]
fn scenario_infinite_price_in_file_is_rejected() {
    let with_inf = REFERENCE_CSV.replacen("20200101,930,1.02", "20200101,930,inf", 1);
    let f = write_tmp(&with_inf);

    let err = load_stock(f.path(), JumpThreshold::default()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("index 2"), "{chain}");
    assert!(chain.contains("finite and strictly positive"), "{chain}");
}
