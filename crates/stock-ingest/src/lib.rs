//! Warehouse report ingestion utilities.
//!
//! This crate turns report workbooks into an addressable grid of cell values
//! and finds report files on disk.
//!
//! # Features
//!
//! - **Grid Access**: [`SheetGrid`] abstracts row/column access so the
//!   cleaning logic can run against synthetic grids
//! - **Workbook Loading**: Read the first sheet of an `.xls`/`.xlsx` file
//! - **Discovery**: List report files matching the monthly naming pattern
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use stock_ingest::{list_report_files, load_first_sheet, SheetGrid};
//!
//! for path in list_report_files(Path::new("reports"))? {
//!     let grid = load_first_sheet(&path)?;
//!     println!("{} rows", grid.row_count());
//! }
//! ```

mod discovery;
mod error;
mod grid;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Grid Access ===
pub use grid::{CellValue, MemoryGrid, SheetGrid};

// === Workbook Loading ===
pub use workbook::{grid_from_range, load_first_sheet};

// === File Discovery ===
pub use discovery::{is_report_filename, list_report_files};
