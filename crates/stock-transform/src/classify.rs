//! Row classification with SKU forward-fill.
//!
//! SKUs appear only on the first row of a product group (merged cells in the
//! source), so the classifier carries the last seen SKU across rows. The
//! checks run in a fixed order:
//!
//! 1. Han text in the SKU cell skips the row and leaves the carried SKU alone.
//! 2. A non-empty SKU cell replaces the carried SKU.
//! 3. Rows before the first SKU are skipped.
//! 4. Summary keywords in the batch cell skip the row.
//! 5. Han text in the cleaned batch skips the row.
//! 6. All-zero placeholder batches skip the row.
//! 7. The record is built from the normalized cells.
//! 8. Rows with no batch and only zero quantities are skipped.
//!
//! A SKU committed at step 2 stays carried even when the same row is skipped
//! by steps 4 to 8.

use std::collections::BTreeMap;
use std::fmt;

use stock_ingest::CellValue;
use stock_model::{Field, InventoryRecord, NUMERIC_FIELDS, Period};

use crate::header::FieldColumns;
use crate::normalization::{
    contains_han, is_summary_label, is_zero_batch, normalize_float, normalize_string,
};

/// Why a row was left out of the cleaned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    /// SKU cell holds a label (series header, summary, misc text).
    ScriptInSku,
    /// No SKU has been seen yet.
    NoSku,
    /// Batch cell holds a total/subtotal keyword.
    SummaryRow,
    /// Cleaned batch holds Han text.
    ScriptInBatch,
    /// Batch is a zero placeholder.
    ZeroBatch,
    /// No batch and every quantity zero.
    BlankRow,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::ScriptInSku => "script_in_sku",
            SkipReason::NoSku => "no_sku",
            SkipReason::SummaryRow => "summary_row",
            SkipReason::ScriptInBatch => "script_in_batch",
            SkipReason::ZeroBatch => "zero_batch",
            SkipReason::BlankRow => "blank_row",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision for a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Keep(InventoryRecord),
    Skip(SkipReason),
}

/// Per-reason skip tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipCounts {
    counts: BTreeMap<SkipReason, usize>,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn get(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, usize)> + '_ {
        self.counts.iter().map(|(reason, count)| (*reason, *count))
    }
}

/// Row classifier state: the SKU carried onto following batch rows.
#[derive(Debug, Clone)]
pub struct RowClassifier<'a> {
    columns: &'a FieldColumns,
    period: &'a Period,
    current_sku: String,
}

impl<'a> RowClassifier<'a> {
    pub fn new(columns: &'a FieldColumns, period: &'a Period) -> Self {
        Self {
            columns,
            period,
            current_sku: String::new(),
        }
    }

    /// The SKU currently carried forward (empty before the first SKU row).
    pub fn current_sku(&self) -> &str {
        &self.current_sku
    }

    /// Classify one data row, updating the carried SKU.
    pub fn classify(&mut self, row: &[CellValue]) -> RowOutcome {
        let sku = self.text(row, Field::Sku);
        if contains_han(&sku) {
            return RowOutcome::Skip(SkipReason::ScriptInSku);
        }

        if !sku.is_empty() {
            self.current_sku = sku;
        }
        if self.current_sku.is_empty() {
            return RowOutcome::Skip(SkipReason::NoSku);
        }

        let batch = self.text(row, Field::Batch);
        if is_summary_label(&batch) {
            return RowOutcome::Skip(SkipReason::SummaryRow);
        }
        if contains_han(&batch) {
            return RowOutcome::Skip(SkipReason::ScriptInBatch);
        }
        if is_zero_batch(&batch) {
            return RowOutcome::Skip(SkipReason::ZeroBatch);
        }

        let mut record = InventoryRecord::new(self.period.clone(), self.current_sku.clone());
        record.batch = batch;
        for field in NUMERIC_FIELDS {
            let value = self.quantity(row, field);
            if let Some(slot) = record.quantity_mut(field) {
                *slot = value;
            }
        }
        record.remark = self.text(row, Field::Remark);

        if record.is_blank() {
            return RowOutcome::Skip(SkipReason::BlankRow);
        }
        RowOutcome::Keep(record)
    }

    fn cell<'r>(&self, row: &'r [CellValue], field: Field) -> Option<&'r CellValue> {
        self.columns.get(field).and_then(|index| row.get(index))
    }

    fn text(&self, row: &[CellValue], field: Field) -> String {
        self.cell(row, field)
            .map(normalize_string)
            .unwrap_or_default()
    }

    fn quantity(&self, row: &[CellValue], field: Field) -> f64 {
        self.cell(row, field).map(normalize_float).unwrap_or(0.0)
    }
}

/// Fold a fresh classifier over `rows`, returning kept records in input
/// order together with skip statistics.
pub fn classify_rows<'r, I>(
    rows: I,
    columns: &FieldColumns,
    period: &Period,
) -> (Vec<InventoryRecord>, SkipCounts)
where
    I: IntoIterator<Item = &'r [CellValue]>,
{
    let mut classifier = RowClassifier::new(columns, period);
    let mut records = Vec::new();
    let mut skipped = SkipCounts::default();
    for (index, row) in rows.into_iter().enumerate() {
        match classifier.classify(row) {
            RowOutcome::Keep(record) => records.push(record),
            RowOutcome::Skip(reason) => {
                tracing::trace!(row = index, reason = %reason, "skipped row");
                skipped.record(reason);
            }
        }
    }
    (records, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{FieldCandidates, resolve_field_columns};

    fn columns() -> FieldColumns {
        let headers: Vec<String> = [
            "型号",
            "批号",
            "上月结存",
            "本月入库",
            "本月领用",
            "本月销售",
            "取样",
            "本月结存",
            "小计",
            "备注",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        resolve_field_columns(&headers, &FieldCandidates::default())
    }

    fn period() -> Period {
        Period::from_filename("2025年7月份成品仓库报表.xls").unwrap()
    }

    fn row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    #[test]
    fn keeps_data_row_and_normalizes() {
        let columns = columns();
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);
        let mut cells = row(&["A100", "", "10", "5", "2", "1", "0", "12", "0", " ok "]);
        cells[1] = CellValue::Number(25072260.0);

        let RowOutcome::Keep(record) = classifier.classify(&cells) else {
            panic!("row should be kept");
        };
        assert_eq!(record.sku, "A100");
        assert_eq!(record.batch, "25072260");
        assert_eq!(record.last_month_stock, 10.0);
        assert_eq!(record.month_end_stock, 12.0);
        assert_eq!(record.remark, "ok");
        assert_eq!(record.period.as_str(), "2025-07");
    }

    #[test]
    fn han_sku_skips_without_touching_carry() {
        let columns = columns();
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);
        classifier.classify(&row(&["A100", "B1", "1"]));
        let outcome = classifier.classify(&row(&["甲类", "B2", "1"]));
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::ScriptInSku));
        assert_eq!(classifier.current_sku(), "A100");
    }

    #[test]
    fn rows_before_first_sku_are_skipped() {
        let columns = columns();
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);
        let outcome = classifier.classify(&row(&["", "B1", "5"]));
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::NoSku));
    }

    #[test]
    fn batch_skips_keep_committed_sku() {
        let columns = columns();
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);

        let outcome = classifier.classify(&row(&["A200", "合计", "5"]));
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::SummaryRow));
        assert_eq!(classifier.current_sku(), "A200");

        let RowOutcome::Keep(record) = classifier.classify(&row(&["", "B9", "5"])) else {
            panic!("row should be kept");
        };
        assert_eq!(record.sku, "A200");
    }

    #[test]
    fn zero_han_and_blank_batches() {
        let columns = columns();
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);
        assert_eq!(
            classifier.classify(&row(&["A1", "000000", "3"])),
            RowOutcome::Skip(SkipReason::ZeroBatch)
        );
        assert_eq!(
            classifier.classify(&row(&["A1", "0.0", "3"])),
            RowOutcome::Skip(SkipReason::ZeroBatch)
        );
        assert_eq!(
            classifier.classify(&row(&["A1", "加工费", "3"])),
            RowOutcome::Skip(SkipReason::ScriptInBatch)
        );
        assert_eq!(
            classifier.classify(&row(&["A1", "", "0", "0"])),
            RowOutcome::Skip(SkipReason::BlankRow)
        );
        // Empty batch with a quantity is still data.
        assert!(matches!(
            classifier.classify(&row(&["A1", "", "0", "4"])),
            RowOutcome::Keep(_)
        ));
    }

    #[test]
    fn missing_columns_default() {
        let headers = vec!["型号".to_string(), "批号".to_string()];
        let columns = resolve_field_columns(&headers, &FieldCandidates::default());
        let period = period();
        let mut classifier = RowClassifier::new(&columns, &period);
        let RowOutcome::Keep(record) = classifier.classify(&row(&["A1", "B1", "9"])) else {
            panic!("row should be kept");
        };
        assert_eq!(record.last_month_stock, 0.0);
        assert_eq!(record.remark, "");
    }

    #[test]
    fn fold_is_deterministic_and_ordered() {
        let columns = columns();
        let period = period();
        let rows = vec![
            row(&["", "B0", "1"]),
            row(&["A1", "B1", "1"]),
            row(&["", "B2", "2"]),
            row(&["小计", "", "3"]),
            row(&["", "B3", "3"]),
            row(&["A2", "B4", "4"]),
            row(&["", "00", "4"]),
        ];

        let (first, skipped) = classify_rows(rows.iter().map(Vec::as_slice), &columns, &period);
        let (second, _) = classify_rows(rows.iter().map(Vec::as_slice), &columns, &period);

        assert_eq!(first, second);
        let keys: Vec<(&str, &str)> = first
            .iter()
            .map(|r| (r.sku.as_str(), r.batch.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("A1", "B1"), ("A1", "B2"), ("A1", "B3"), ("A2", "B4")]
        );
        assert_eq!(skipped.get(SkipReason::NoSku), 1);
        assert_eq!(skipped.get(SkipReason::ScriptInSku), 1);
        assert_eq!(skipped.get(SkipReason::ZeroBatch), 1);
        assert_eq!(skipped.total(), 3);
    }
}
