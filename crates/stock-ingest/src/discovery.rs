//! Report file discovery.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

/// Monthly finished-goods report, e.g. `2025年7月份成品仓库报表.xls`.
static REPORT_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}年\d{1,2}月份成品仓库报表\.xlsx?$").expect("Invalid report file regex")
});

/// Returns true if `name` follows the monthly report naming pattern.
pub fn is_report_filename(name: &str) -> bool {
    REPORT_FILE_REGEX.is_match(name)
}

/// Lists report files in a directory.
///
/// Only regular files whose name matches the report pattern are returned,
/// sorted by filename.
pub fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_report_filename);
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
