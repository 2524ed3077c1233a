//! Output sheet naming.

/// Name of the primary output sheet ("finished-goods table").
pub const PRIMARY_SHEET_NAME: &str = "成品表";

/// Remark substring flagging a major-customer transaction.
pub const BIG_CUSTOMER_MARKER: &str = "大客户";

/// Secondary sheet name for the big-customer subset of `sheet`.
pub fn big_customer_sheet_name(sheet: &str) -> String {
    format!("{sheet}_{BIG_CUSTOMER_MARKER}")
}
