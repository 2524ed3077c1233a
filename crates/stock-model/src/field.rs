//! Semantic fields extracted from the report sheet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic column of the inventory report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Sku,
    Batch,
    LastMonthStock,
    MonthIn,
    MonthOut,
    MonthSale,
    SampleOut,
    MonthEndStock,
    NoteValue,
    Remark,
}

/// Quantity fields, in output order.
pub const NUMERIC_FIELDS: [Field; 7] = [
    Field::LastMonthStock,
    Field::MonthIn,
    Field::MonthOut,
    Field::MonthSale,
    Field::SampleOut,
    Field::MonthEndStock,
    Field::NoteValue,
];

impl Field {
    /// Every field, in the order columns are resolved.
    pub const ALL: [Field; 10] = [
        Field::Sku,
        Field::Batch,
        Field::LastMonthStock,
        Field::MonthIn,
        Field::MonthOut,
        Field::MonthSale,
        Field::SampleOut,
        Field::MonthEndStock,
        Field::NoteValue,
        Field::Remark,
    ];

    /// Output column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Sku => "sku",
            Field::Batch => "batch",
            Field::LastMonthStock => "last_month_stock",
            Field::MonthIn => "month_in",
            Field::MonthOut => "month_out",
            Field::MonthSale => "month_sale",
            Field::SampleOut => "sample_out",
            Field::MonthEndStock => "month_end_stock",
            Field::NoteValue => "note_value",
            Field::Remark => "remark",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
