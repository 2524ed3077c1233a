//! First-sheet workbook loading.

use std::path::Path;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::grid::{CellValue, MemoryGrid, SheetGrid};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load the first worksheet of an `.xls`/`.xlsx` file into a [`MemoryGrid`].
///
/// Only sheet index 0 is read; other sheets are ignored. The workbook handle
/// is released before returning. Row 0 is the title row; a sheet with no
/// non-blank cell below it is reported as [`IngestError::EmptySheet`].
pub fn load_first_sheet(path: &Path) -> Result<MemoryGrid> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    drop(workbook);

    let grid = grid_from_range(&range);
    if grid.is_blank_from(1) {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = grid.row_count(),
        columns = grid.column_count(),
        "loaded first sheet"
    );
    Ok(grid)
}

/// Convert a worksheet range into a grid addressed by absolute sheet position.
pub fn grid_from_range(range: &Range<Data>) -> MemoryGrid {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return MemoryGrid::default();
    };
    let mut grid = MemoryGrid::with_size(end.0 as usize + 1, end.1 as usize + 1);
    // `cells()` yields coordinates relative to `range.start()`.
    for (row, col, value) in range.cells() {
        grid.set(
            start.0 as usize + row,
            start.1 as usize + col,
            convert_value(value),
        );
    }
    grid
}

fn convert_value(value: &Data) -> CellValue {
    match value {
        Data::Empty => CellValue::Empty,
        Data::Bool(v) => CellValue::Bool(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(v) => CellValue::from(v.as_str()),
        Data::DateTime(v) => convert_datetime(v),
        Data::DateTimeIso(v) | Data::DurationIso(v) => CellValue::from(v.as_str()),
        Data::Error(e) => CellValue::Text(format!("#{e:?}")),
    }
}

/// Date cells read as timestamps (`2025-07-01 00:00:00`); durations and
/// out-of-range serials keep their numeric value.
fn convert_datetime(value: &ExcelDateTime) -> CellValue {
    if value.is_duration() {
        return CellValue::Number(value.as_f64());
    }
    match value.as_datetime() {
        Some(datetime) => CellValue::Text(datetime.format(TIMESTAMP_FORMAT).to_string()),
        None => CellValue::Number(value.as_f64()),
    }
}
