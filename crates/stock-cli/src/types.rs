use std::path::PathBuf;

use stock_model::Period;
use stock_report::WorkbookSummary;

/// How one input file ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Cleaned workbook written.
    Written(WorkbookSummary),
    /// Sheet parsed but no record survived; nothing written.
    NoData,
    /// Filename carries no period; file ignored.
    Skipped { reason: String },
    /// Processing failed (directory mode only; single-file mode returns the error).
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub period: Option<Period>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }
}

/// Which kind of target was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    File,
    Directory,
}

#[derive(Debug)]
pub struct RunResult {
    pub mode: RunMode,
    pub target: PathBuf,
    pub reports: Vec<FileReport>,
}
