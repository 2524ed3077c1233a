//! Cleaning of finished-goods inventory report sheets.
//!
//! The sheet processor locates the two-row header block, resolves semantic
//! fields to columns, then folds a [`RowClassifier`] over the data rows to
//! keep real batch rows, forward-fill SKUs and normalize cell values.
//!
//! ```ignore
//! use stock_transform::{ProcessingOptions, process_sheet, records_to_frame};
//!
//! let outcome = process_sheet(&grid, &period, "sheet_0", &ProcessingOptions::default());
//! let frame = records_to_frame(&outcome.records)?;
//! ```

pub mod classify;
pub mod frame;
pub mod header;
pub mod normalization;
pub mod options;
pub mod sheet;

pub use classify::{RowClassifier, RowOutcome, SkipCounts, SkipReason, classify_rows};
pub use frame::{big_customer_subset, records_to_frame};
pub use header::{
    FieldCandidates, FieldColumns, build_combined_headers, find_header_row, resolve_field_columns,
};
pub use normalization::{contains_han, is_zero_batch, normalize_float, normalize_string};
pub use options::ProcessingOptions;
pub use sheet::{SheetOutcome, process_sheet};
