//! Sheet-level orchestration.

use stock_ingest::{CellValue, SheetGrid};
use stock_model::{Field, InventoryRecord, Period};

use crate::classify::{SkipCounts, classify_rows};
use crate::header::{build_combined_headers, find_header_row, resolve_field_columns};
use crate::options::ProcessingOptions;

/// Result of cleaning one sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetOutcome {
    /// Kept records in source row order.
    pub records: Vec<InventoryRecord>,
    /// Skipped rows by reason.
    pub skipped: SkipCounts,
    /// First of the two header rows.
    pub header_row: usize,
    /// Fields that matched no column.
    pub missing_fields: Vec<Field>,
}

impl SheetOutcome {
    /// No record survived classification.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Clean one report sheet.
///
/// Missing columns are logged and default to empty text or zero. Data rows
/// start right after the second header row and run to the end of the sheet.
pub fn process_sheet<G: SheetGrid + ?Sized>(
    grid: &G,
    period: &Period,
    label: &str,
    options: &ProcessingOptions,
) -> SheetOutcome {
    let header_row = find_header_row(grid, options);
    let second_row = header_row.saturating_add(1);
    let data_start = second_row.saturating_add(1);

    let headers = build_combined_headers(grid, header_row, second_row);
    let columns = resolve_field_columns(&headers, &options.field_candidates);
    let missing_fields = columns.missing();
    for field in &missing_fields {
        tracing::warn!(sheet = label, field = %field, "column not found");
    }

    let rows: Vec<Vec<CellValue>> = (data_start..grid.row_count())
        .map(|row| grid.row_values(row))
        .collect();
    let (records, skipped) = classify_rows(rows.iter().map(Vec::as_slice), &columns, period);

    tracing::debug!(
        sheet = label,
        header_row,
        data_rows = rows.len(),
        kept = records.len(),
        skipped = skipped.total(),
        "classified sheet rows"
    );
    for (reason, count) in skipped.iter() {
        tracing::debug!(sheet = label, reason = %reason, count, "skipped rows");
    }

    SheetOutcome {
        records,
        skipped,
        header_row,
        missing_fields,
    }
}
