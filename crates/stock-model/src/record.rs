use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::period::Period;

/// Column order of the cleaned table.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "period",
    "sku",
    "batch",
    "last_month_stock",
    "month_in",
    "month_out",
    "month_sale",
    "sample_out",
    "month_end_stock",
    "note_value",
    "remark",
];

/// One batch row of the cleaned inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub period: Period,
    /// Forward-filled product identifier; never empty.
    pub sku: String,
    pub batch: String,
    pub last_month_stock: f64,
    pub month_in: f64,
    pub month_out: f64,
    pub month_sale: f64,
    pub sample_out: f64,
    pub month_end_stock: f64,
    pub note_value: f64,
    pub remark: String,
}

impl InventoryRecord {
    /// Empty record for the given period and SKU; quantities default to zero.
    pub fn new(period: Period, sku: impl Into<String>) -> Self {
        Self {
            period,
            sku: sku.into(),
            batch: String::new(),
            last_month_stock: 0.0,
            month_in: 0.0,
            month_out: 0.0,
            month_sale: 0.0,
            sample_out: 0.0,
            month_end_stock: 0.0,
            note_value: 0.0,
            remark: String::new(),
        }
    }

    /// Quantity value for a numeric field; `None` for text fields.
    pub fn quantity(&self, field: Field) -> Option<f64> {
        match field {
            Field::LastMonthStock => Some(self.last_month_stock),
            Field::MonthIn => Some(self.month_in),
            Field::MonthOut => Some(self.month_out),
            Field::MonthSale => Some(self.month_sale),
            Field::SampleOut => Some(self.sample_out),
            Field::MonthEndStock => Some(self.month_end_stock),
            Field::NoteValue => Some(self.note_value),
            Field::Sku | Field::Batch | Field::Remark => None,
        }
    }

    /// Mutable slot for a numeric field; `None` for text fields.
    pub fn quantity_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::LastMonthStock => Some(&mut self.last_month_stock),
            Field::MonthIn => Some(&mut self.month_in),
            Field::MonthOut => Some(&mut self.month_out),
            Field::MonthSale => Some(&mut self.month_sale),
            Field::SampleOut => Some(&mut self.sample_out),
            Field::MonthEndStock => Some(&mut self.month_end_stock),
            Field::NoteValue => Some(&mut self.note_value),
            Field::Sku | Field::Batch | Field::Remark => None,
        }
    }

    /// No batch and every quantity zero: a placeholder row.
    pub fn is_blank(&self) -> bool {
        self.batch.is_empty()
            && crate::field::NUMERIC_FIELDS
                .iter()
                .all(|field| self.quantity(*field) == Some(0.0))
    }
}
