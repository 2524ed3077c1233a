//! Batch identifier placeholders and summary labels.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder batch numbers such as `000000`, `0.0` or `0`.
static ZERO_BATCH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0+\.?0*$").expect("Invalid zero batch regex"));

/// Labels marking total/subtotal rows.
pub const SUMMARY_KEYWORDS: [&str; 5] = ["合计", "小计", "总计", "合 计", "汇总"];

/// True for a non-empty batch made only of zeros.
pub fn is_zero_batch(batch: &str) -> bool {
    !batch.is_empty() && ZERO_BATCH_REGEX.is_match(batch)
}

/// True if the text carries any summary keyword.
pub fn is_summary_label(value: &str) -> bool {
    SUMMARY_KEYWORDS.iter().any(|keyword| value.contains(keyword))
}
