//! Text normalization for identifier and remark cells.

use std::sync::LazyLock;

use regex::Regex;
use stock_ingest::CellValue;

/// Integral value rendered with a float artifact, e.g. `25072260.0`.
static FLOAT_TAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+)\.0$").expect("Invalid float tail regex"));

/// Normalize a cell into its clean display string.
///
/// See [`normalize_text`].
pub fn normalize_string(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Number(v) if v.is_nan() => String::new(),
        CellValue::Text(text) => normalize_text(text),
        other => normalize_text(&other.display()),
    }
}

/// Trim a display string, mapping blank and `nan` to empty and stripping a
/// trailing `.0` from integral numbers (`"25072260.0"` -> `"25072260"`).
pub fn normalize_text(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return String::new();
    }
    match FLOAT_TAIL_REGEX.captures(trimmed) {
        Some(captures) => captures[1].to_string(),
        None => trimmed.to_string(),
    }
}

/// True if the text contains a CJK unified ideograph.
///
/// Label, series and summary rows carry Chinese text in identifier columns;
/// real SKUs and batch numbers do not.
pub fn contains_han(value: &str) -> bool {
    value.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_float_tail() {
        assert_eq!(normalize_text("25072260.0"), "25072260");
        assert_eq!(normalize_text("-12.0"), "-12");
        assert_eq!(normalize_text(" 7.0 "), "7");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_text("12.50"), "12.50");
        assert_eq!(normalize_text("1.05"), "1.05");
        assert_eq!(normalize_text("A-100.0X"), "A-100.0X");
        assert_eq!(normalize_text("  B 1  "), "B 1");
    }

    #[test]
    fn test_blank_and_nan() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("nan"), "");
        assert_eq!(normalize_string(&CellValue::Number(f64::NAN)), "");
        assert_eq!(normalize_string(&CellValue::Empty), "");
    }

    #[test]
    fn test_numeric_cells() {
        assert_eq!(normalize_string(&CellValue::Number(25072260.0)), "25072260");
        assert_eq!(normalize_string(&CellValue::Number(0.5)), "0.5");
        assert_eq!(normalize_string(&CellValue::Bool(false)), "False");
    }

    #[test]
    fn test_contains_han() {
        assert!(contains_han("甲类"));
        assert!(contains_han("A100合计"));
        assert!(!contains_han("A100"));
        assert!(!contains_han("２０２５"));
        assert!(!contains_han(""));
    }
}
