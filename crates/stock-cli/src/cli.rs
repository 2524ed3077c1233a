//! CLI argument definitions for the report cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use stock_transform::options::{DEFAULT_HEADER_FALLBACK_ROW, DEFAULT_HEADER_SCAN_ROWS};

#[derive(Parser)]
#[command(
    name = "stock-clean",
    version,
    about = "Clean finished-goods warehouse reports into tidy inventory tables",
    long_about = "Clean finished-goods warehouse reports into tidy inventory tables.\n\n\
                  Reads the first sheet of each report named like\n\
                  2025年7月份成品仓库报表.xls and writes <period>_cleaned.xlsx\n\
                  with a 成品表 sheet and, when present, a 成品表_大客户 sheet."
)]
pub struct Cli {
    /// Report file, or a directory containing report files.
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Directory for cleaned workbooks (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of leading rows searched for the 型/型号 header marker.
    #[arg(long = "header-scan-rows", value_name = "N", default_value_t = DEFAULT_HEADER_SCAN_ROWS)]
    pub header_scan_rows: usize,

    /// Header row (0-based) assumed when no marker is found.
    #[arg(long = "header-fallback-row", value_name = "N", default_value_t = DEFAULT_HEADER_FALLBACK_ROW)]
    pub header_fallback_row: usize,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
