//! Cell value normalization.
//!
//! Report cells arrive as a mix of text, floats and blanks. These helpers
//! coerce them into clean strings and quantities without ever failing.

pub mod batch;
pub mod numeric;
pub mod text;

pub use batch::{SUMMARY_KEYWORDS, is_summary_label, is_zero_batch};
pub use numeric::{normalize_float, parse_quantity};
pub use text::{contains_han, normalize_string, normalize_text};
