//! Tests for report file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use stock_ingest::list_report_files;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"placeholder").expect("write file");
    path
}

#[test]
fn lists_matching_reports_in_name_order() {
    let dir = TempDir::new().expect("temp dir");
    touch(dir.path(), "2025年8月份成品仓库报表.xlsx");
    touch(dir.path(), "2025年07月份成品仓库报表.xls");
    touch(dir.path(), "2024年12月份成品仓库报表.xls");
    touch(dir.path(), "2025-07_cleaned.xlsx");
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("2025年9月份成品仓库报表.xls")).expect("create dir");

    let files = list_report_files(dir.path()).expect("list reports");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec![
            "2024年12月份成品仓库报表.xls",
            "2025年07月份成品仓库报表.xls",
            "2025年8月份成品仓库报表.xlsx",
        ]
    );
}

#[test]
fn empty_directory_yields_no_reports() {
    let dir = TempDir::new().expect("temp dir");
    let files = list_report_files(dir.path()).expect("list reports");
    assert!(files.is_empty());
}
