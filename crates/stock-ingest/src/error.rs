//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and reading report workbooks.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Report file not found.
    #[error("report file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Workbook Errors ===
    /// The spreadsheet reader rejected the file.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// The first sheet has no non-blank cell.
    #[error("First sheet is empty. Expected finished goods table: {path}")]
    EmptySheet { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/2025年7月份成品仓库报表.xls"),
        };
        assert_eq!(
            err.to_string(),
            "report file not found: /path/to/2025年7月份成品仓库报表.xls"
        );
    }

    #[test]
    fn test_empty_sheet_message() {
        let err = IngestError::EmptySheet {
            path: PathBuf::from("a.xls"),
        };
        assert!(err.to_string().starts_with("First sheet is empty"));
    }
}
