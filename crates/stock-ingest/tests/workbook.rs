//! Tests for first-sheet workbook loading.

use rust_xlsxwriter::Workbook;
use stock_ingest::{CellValue, IngestError, SheetGrid, load_first_sheet};
use tempfile::TempDir;

#[test]
fn reads_only_the_first_sheet() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("2025年7月份成品仓库报表.xlsx");

    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(4, 0, "型号").expect("write");
    first.write_number(6, 2, 25072260.0).expect("write");
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "ignored").expect("write");
    workbook.save(&path).expect("save workbook");

    let grid = load_first_sheet(&path).expect("load sheet");
    assert_eq!(grid.cell(4, 0), &CellValue::Text("型号".to_string()));
    assert_eq!(grid.cell(6, 2).display(), "25072260.0");
    assert_eq!(grid.cell(0, 0), &CellValue::Empty);
    assert_eq!(grid.row_count(), 7);
}

#[test]
fn blank_first_sheet_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("2025年7月份成品仓库报表.xlsx");

    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "data elsewhere").expect("write");
    workbook.save(&path).expect("save workbook");

    let err = load_first_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptySheet { .. }));
}

#[test]
fn title_only_sheet_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("2025年7月份成品仓库报表.xlsx");

    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(0, 0, "成品仓库报表").expect("write");
    workbook.save(&path).expect("save workbook");

    let err = load_first_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptySheet { .. }));
}

#[test]
fn unreadable_file_is_a_workbook_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("2025年7月份成品仓库报表.xlsx");
    std::fs::write(&path, b"not a spreadsheet").expect("write file");

    let err = load_first_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }));
}
