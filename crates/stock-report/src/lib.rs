//! Cleaned inventory workbook output.
//!
//! Writes the cleaned table to an `.xlsx` workbook with a primary
//! finished-goods sheet and, when any rows qualify, a big-customer sheet.

mod xlsx;

pub use xlsx::{WorkbookSummary, output_file_name, write_cleaned_workbook};
