//! Report processing pipeline.
//!
//! Each report file goes through these stages:
//! 1. **Period**: Parse the `YYYY-MM` period from the filename
//! 2. **Ingest**: Load the first sheet into a grid
//! 3. **Clean**: Locate headers, classify rows, normalize values
//! 4. **Output**: Write the cleaned workbook (primary + big-customer sheet)
//!
//! Directory runs isolate failures per file: an error is logged and recorded
//! and the next file is processed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use stock_ingest::{SheetGrid, list_report_files, load_first_sheet};
use stock_model::Period;
use stock_report::{output_file_name, write_cleaned_workbook};
use stock_transform::{ProcessingOptions, process_sheet, records_to_frame};

use crate::types::{FileOutcome, FileReport};

/// Label used in logs for the only sheet that is read.
const SHEET_LABEL: &str = "sheet_0";

/// Destination of the cleaned workbook for `input`.
///
/// Defaults to the input's directory when no output directory is given.
pub fn output_path(input: &Path, period: &Period, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(output_file_name(period))
}

/// Clean a single report file.
///
/// A filename without a period is logged and reported as skipped. Load and
/// write failures are returned as errors.
pub fn process_file(
    path: &Path,
    output_dir: Option<&Path>,
    options: &ProcessingOptions,
) -> Result<FileReport> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let period = match Period::from_filename(&file_name) {
        Ok(period) => period,
        Err(err) => {
            error!(file = %file_name, "{err}");
            return Ok(FileReport {
                path: path.to_path_buf(),
                period: None,
                outcome: FileOutcome::Skipped {
                    reason: err.to_string(),
                },
            });
        }
    };

    let span = info_span!("file", file = %file_name, period = %period);
    let _guard = span.enter();
    info!("processing report");

    let grid = load_first_sheet(path)
        .with_context(|| format!("failed to process first sheet for '{file_name}'"))?;
    info!(
        rows = grid.row_count(),
        columns = grid.column_count(),
        "loaded finished goods sheet"
    );

    let outcome = process_sheet(&grid, &period, SHEET_LABEL, options);
    if outcome.is_empty() {
        info!("no data extracted, skipping output");
        return Ok(FileReport {
            path: path.to_path_buf(),
            period: Some(period),
            outcome: FileOutcome::NoData,
        });
    }
    info!(kept = outcome.records.len(), "rows kept");

    let frame = records_to_frame(&outcome.records).context("build cleaned table")?;
    let out_path = output_path(path, &period, output_dir);
    let summary = write_cleaned_workbook(&out_path, &frame)
        .with_context(|| format!("write {}", out_path.display()))?;
    info!(output = %summary.path.display(), "saved cleaned workbook");

    Ok(FileReport {
        path: path.to_path_buf(),
        period: Some(period),
        outcome: FileOutcome::Written(summary),
    })
}

/// Clean every report file in `dir`, in filename order.
///
/// Per-file failures are logged with their full error chain and recorded as
/// [`FileOutcome::Failed`]; they never abort the batch. Outputs go to `dir`
/// unless `output_dir` is set.
pub fn process_directory(
    dir: &Path,
    output_dir: Option<&Path>,
    options: &ProcessingOptions,
) -> Result<Vec<FileReport>> {
    let files = list_report_files(dir).context("list report files")?;
    if files.is_empty() {
        warn!(directory = %dir.display(), "no matching report files found");
        return Ok(Vec::new());
    }
    info!(
        directory = %dir.display(),
        file_count = files.len(),
        "found report files"
    );

    let target_dir = output_dir.unwrap_or(dir);
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        match process_file(&path, Some(target_dir), options) {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!(file = %path.display(), error = ?err, "failed to process report");
                let period = path
                    .file_name()
                    .and_then(|name| Period::from_filename(&name.to_string_lossy()).ok());
                reports.push(FileReport {
                    path,
                    period,
                    outcome: FileOutcome::Failed {
                        message: format!("{err:#}"),
                    },
                });
            }
        }
    }
    Ok(reports)
}

/// Create the output directory when one was requested.
pub fn prepare_output_dir(output_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    Ok(())
}
