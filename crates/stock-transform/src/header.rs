//! Header block detection and field-to-column resolution.
//!
//! Report headers span two physical rows (merged cells in the source), e.g.
//! `本月` over `入库`. Each column's two texts are concatenated into a
//! combined header, which is then matched exactly against a table of
//! accepted texts per field.

use std::collections::BTreeMap;

use stock_ingest::SheetGrid;
use stock_model::Field;

use crate::options::ProcessingOptions;

/// Column-0 texts marking the first header row ("type" / "model").
const HEADER_MARKERS: [&str; 2] = ["型", "型号"];

/// Locate the first of the two header rows.
///
/// Scans the first `header_scan_rows` rows for a column-0 marker. Falls back
/// to `header_fallback_row` when none is found.
pub fn find_header_row<G: SheetGrid + ?Sized>(grid: &G, options: &ProcessingOptions) -> usize {
    let limit = options.header_scan_rows.min(grid.row_count());
    let found = (0..limit).find(|&row| {
        let text = grid.cell(row, 0).display();
        HEADER_MARKERS.contains(&text.trim())
    });
    match found {
        Some(row) => row,
        None => {
            tracing::warn!(
                scanned_rows = limit,
                fallback_row = options.header_fallback_row,
                "header marker not found, using fallback header row"
            );
            options.header_fallback_row
        }
    }
}

/// Concatenate the trimmed texts of two header rows for every column.
pub fn build_combined_headers<G: SheetGrid + ?Sized>(
    grid: &G,
    row1: usize,
    row2: usize,
) -> Vec<String> {
    (0..grid.column_count())
        .map(|col| {
            let upper = grid.cell(row1, col).display();
            let lower = grid.cell(row2, col).display();
            format!("{}{}", upper.trim(), lower.trim())
        })
        .collect()
}

/// Accepted combined-header texts per field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCandidates {
    entries: Vec<(Field, Vec<String>)>,
}

impl Default for FieldCandidates {
    fn default() -> Self {
        let table: [(Field, &[&str]); 10] = [
            (Field::Sku, &["型号"]),
            (Field::Batch, &["批号"]),
            (Field::LastMonthStock, &["上月结存"]),
            (Field::MonthIn, &["本月入库"]),
            (Field::MonthOut, &["本月领用", "车间领用"]),
            (Field::MonthSale, &["本月销售", "本月出库销售"]),
            (Field::SampleOut, &["取样"]),
            (Field::MonthEndStock, &["本月结存"]),
            (Field::NoteValue, &["小计"]),
            (Field::Remark, &["备注"]),
        ];
        Self {
            entries: table
                .into_iter()
                .map(|(field, texts)| (field, texts.iter().map(|t| (*t).to_string()).collect()))
                .collect(),
        }
    }
}

impl FieldCandidates {
    /// Candidate texts for a field (empty if the field is not configured).
    pub fn candidates(&self, field: Field) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, texts)| texts.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the candidate list of a field.
    #[must_use]
    pub fn with_candidates(mut self, field: Field, texts: &[&str]) -> Self {
        let texts: Vec<String> = texts.iter().map(|t| (*t).to_string()).collect();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = texts,
            None => self.entries.push((field, texts)),
        }
        self
    }
}

/// Resolved column index for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldColumns {
    columns: BTreeMap<Field, usize>,
}

impl FieldColumns {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Fields with no matching column, in resolution order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }
}

/// Resolve every field to the first column whose combined header equals one
/// of its candidates, trying candidates in priority order.
pub fn resolve_field_columns(headers: &[String], candidates: &FieldCandidates) -> FieldColumns {
    let mut columns = BTreeMap::new();
    for field in Field::ALL {
        let found = candidates
            .candidates(field)
            .iter()
            .find_map(|candidate| headers.iter().position(|header| header == candidate));
        if let Some(index) = found {
            columns.insert(field, index);
        }
    }
    FieldColumns { columns }
}
