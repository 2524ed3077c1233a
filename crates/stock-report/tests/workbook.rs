//! Tests for cleaned workbook output.

use calamine::{Data, Reader, Xlsx, open_workbook};
use stock_model::{InventoryRecord, Period};
use stock_report::{output_file_name, write_cleaned_workbook};
use stock_transform::records_to_frame;
use tempfile::TempDir;

fn record(period: &Period, sku: &str, batch: &str, remark: &str) -> InventoryRecord {
    let mut record = InventoryRecord::new(period.clone(), sku);
    record.batch = batch.to_string();
    record.month_end_stock = 12.0;
    record.remark = remark.to_string();
    record
}

#[test]
fn writes_primary_and_big_customer_sheets() {
    let dir = TempDir::new().expect("temp dir");
    let period = Period::from_filename("2025年7月份成品仓库报表.xls").expect("period");
    let path = dir.path().join(output_file_name(&period));
    let frame = records_to_frame(&[
        record(&period, "A100", "B1", ""),
        record(&period, "A100", "B2", "大客户"),
    ])
    .expect("frame");

    let summary = write_cleaned_workbook(&path, &frame).expect("write workbook");
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.big_customer_rows, 1);
    assert_eq!(summary.sheets, vec!["成品表", "成品表_大客户"]);
    assert!(path.ends_with("2025-07_cleaned.xlsx"));

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("open output");
    assert_eq!(workbook.sheet_names(), vec!["成品表", "成品表_大客户"]);

    let primary = workbook.worksheet_range("成品表").expect("primary sheet");
    assert_eq!(primary.height(), 3);
    assert_eq!(primary.get_value((0, 0)), Some(&Data::String("period".into())));
    assert_eq!(primary.get_value((0, 10)), Some(&Data::String("remark".into())));
    assert_eq!(primary.get_value((2, 1)), Some(&Data::String("A100".into())));
    assert_eq!(primary.get_value((2, 8)), Some(&Data::Float(12.0)));

    let big = workbook
        .worksheet_range("成品表_大客户")
        .expect("big-customer sheet");
    assert_eq!(big.height(), 2);
    assert_eq!(big.get_value((1, 2)), Some(&Data::String("B2".into())));
}

#[test]
fn skips_big_customer_sheet_without_matches() {
    let dir = TempDir::new().expect("temp dir");
    let period = Period::from_filename("2025年8月").expect("period");
    let path = dir.path().join(output_file_name(&period));
    let frame = records_to_frame(&[record(&period, "A1", "B1", "普通")]).expect("frame");

    let summary = write_cleaned_workbook(&path, &frame).expect("write workbook");
    assert_eq!(summary.big_customer_rows, 0);
    assert_eq!(summary.sheets, vec!["成品表"]);

    let workbook: Xlsx<_> = open_workbook(&path).expect("open output");
    assert_eq!(workbook.sheet_names(), vec!["成品表"]);
}
