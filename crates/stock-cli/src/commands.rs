use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use stock_cli::pipeline::{prepare_output_dir, process_directory, process_file};
use stock_cli::types::{RunMode, RunResult};
use stock_transform::ProcessingOptions;

use crate::cli::Cli;

/// Processing options from CLI flags.
pub fn processing_options(cli: &Cli) -> ProcessingOptions {
    ProcessingOptions::default()
        .with_header_scan_rows(cli.header_scan_rows)
        .with_header_fallback_row(cli.header_fallback_row)
}

/// Clean a single report file or every report in a directory.
///
/// In file mode any failure is returned; in directory mode failures are
/// recorded per file.
pub fn run_clean(target: &Path, cli: &Cli) -> Result<RunResult> {
    let options = processing_options(cli);
    let output_dir = cli.output_dir.as_deref();
    prepare_output_dir(output_dir)?;

    let span = info_span!("clean", target = %target.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (mode, reports) = if target.is_dir() {
        (
            RunMode::Directory,
            process_directory(target, output_dir, &options)?,
        )
    } else {
        (
            RunMode::File,
            vec![process_file(target, output_dir, &options)?],
        )
    };

    info!(
        files = reports.len(),
        failed = reports.iter().filter(|r| r.is_failure()).count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        mode,
        target: target.to_path_buf(),
        reports,
    })
}
