//! Property tests for value normalization.

use proptest::prelude::*;
use stock_ingest::CellValue;
use stock_transform::normalization::normalize_text;
use stock_transform::{is_zero_batch, normalize_float, normalize_string};

proptest! {
    #[test]
    fn float_tail_is_stripped(value in any::<i64>()) {
        let rendered = format!("{value}.0");
        prop_assert_eq!(normalize_text(&rendered), value.to_string());
    }

    #[test]
    fn integral_numbers_render_as_integers(value in -1_000_000_000i64..1_000_000_000) {
        prop_assert_eq!(normalize_string(&CellValue::Number(value as f64)), value.to_string());
    }

    #[test]
    fn other_text_is_trimmed_passthrough(value in "[A-Za-z][A-Za-z0-9.\\-]{0,12}") {
        prop_assume!(value != "nan");
        let padded = format!("  {value} ");
        prop_assert_eq!(normalize_text(&padded), value);
    }

    #[test]
    fn normalize_float_never_fails(value in ".*") {
        let parsed = normalize_float(&CellValue::Text(value));
        prop_assert!(!parsed.is_nan());
    }

    #[test]
    fn numeric_text_parses_exactly(value in -1.0e9f64..1.0e9) {
        let parsed = normalize_float(&CellValue::Text(value.to_string()));
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn zero_patterns_are_placeholders(ints in 1usize..8, decimals in 0usize..4, dot in any::<bool>()) {
        let mut batch = "0".repeat(ints);
        if dot {
            batch.push('.');
            batch.push_str(&"0".repeat(decimals));
        }
        prop_assert!(is_zero_batch(&batch));
    }

    #[test]
    fn non_zero_digit_is_not_placeholder(prefix in 0usize..4, digit in 1u8..10) {
        let batch = format!("{}{}", "0".repeat(prefix), digit);
        prop_assert!(!is_zero_batch(&batch));
    }
}
