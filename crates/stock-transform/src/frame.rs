//! DataFrame construction for the cleaned table.

use polars::prelude::{BooleanChunked, Column, DataFrame, NewChunkedArray, PolarsResult};

use stock_model::{BIG_CUSTOMER_MARKER, Field, InventoryRecord, NUMERIC_FIELDS};

/// Build the cleaned table with columns in output order.
pub fn records_to_frame(records: &[InventoryRecord]) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(3 + NUMERIC_FIELDS.len() + 1);
    columns.push(text_column("period", records, |r| r.period.as_str()));
    columns.push(text_column(Field::Sku.as_str(), records, |r| &r.sku));
    columns.push(text_column(Field::Batch.as_str(), records, |r| &r.batch));
    for field in NUMERIC_FIELDS {
        let values: Vec<f64> = records
            .iter()
            .map(|r| r.quantity(field).unwrap_or(0.0))
            .collect();
        columns.push(Column::new(field.as_str().into(), values));
    }
    columns.push(text_column(Field::Remark.as_str(), records, |r| &r.remark));
    DataFrame::new(columns)
}

/// Rows whose remark carries the big-customer marker.
pub fn big_customer_subset(frame: &DataFrame) -> PolarsResult<DataFrame> {
    let remarks = frame.column(Field::Remark.as_str())?.str()?;
    let keep: Vec<bool> = remarks
        .into_iter()
        .map(|value| value.is_some_and(|text| text.contains(BIG_CUSTOMER_MARKER)))
        .collect();
    let mask = BooleanChunked::from_slice("big_customer".into(), &keep);
    frame.filter(&mask)
}

fn text_column<F>(name: &str, records: &[InventoryRecord], value: F) -> Column
where
    F: Fn(&InventoryRecord) -> &str,
{
    let values: Vec<String> = records.iter().map(|r| value(r).to_string()).collect();
    Column::new(name.into(), values)
}
