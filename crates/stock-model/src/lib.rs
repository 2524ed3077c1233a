//! Domain types shared by the warehouse report cleaner crates.

pub mod error;
pub mod field;
pub mod period;
pub mod record;
pub mod sheet;

pub use error::{ModelError, Result};
pub use field::{Field, NUMERIC_FIELDS};
pub use period::Period;
pub use record::{InventoryRecord, OUTPUT_COLUMNS};
pub use sheet::{BIG_CUSTOMER_MARKER, PRIMARY_SHEET_NAME, big_customer_sheet_name};
