//! Quantity coercion.

use stock_ingest::CellValue;

/// Coerce a cell into a quantity.
///
/// Numbers pass through, text is parsed after trimming and booleans count as
/// one or zero. Blank cells, unparseable text and NaN all yield `0.0`.
pub fn normalize_float(value: &CellValue) -> f64 {
    let parsed = match value {
        CellValue::Empty => None,
        CellValue::Number(v) => Some(*v),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::Text(text) => parse_quantity(text),
    };
    match parsed {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parse a textual quantity, returning None for blank or invalid input.
pub fn parse_quantity(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
