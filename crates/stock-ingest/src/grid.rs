//! Row/column addressable view over a worksheet.

use std::fmt;

/// Untyped worksheet cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Render the cell the way the legacy report reader displays it.
    ///
    /// Integral numbers keep a trailing `.0` (`25072260.0`), NaN renders as
    /// `nan` and booleans as `True`/`False`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Number(value) => format_number(*value),
        }
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

/// Shortest round-trip rendering, switching to exponent form below `1e-4`
/// and from `1e16` (`1e+16`, `1.5e-05`).
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .unwrap_or((scientific.as_str(), 0));
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let fixed = format!("{value}");
    if fixed.contains('.') {
        fixed
    } else {
        format!("{fixed}.0")
    }
}

/// Grid-like access to one worksheet.
///
/// Reads outside the populated area return [`CellValue::Empty`].
pub trait SheetGrid {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn cell(&self, row: usize, col: usize) -> &CellValue;

    /// All cells of a row, padded to `column_count`.
    fn row_values(&self, row: usize) -> Vec<CellValue> {
        (0..self.column_count())
            .map(|col| self.cell(row, col).clone())
            .collect()
    }

    /// True when no cell holds a value.
    fn is_blank(&self) -> bool {
        self.is_blank_from(0)
    }

    /// True when no cell at or below `first_row` holds a value.
    fn is_blank_from(&self, first_row: usize) -> bool {
        (first_row..self.row_count())
            .all(|row| (0..self.column_count()).all(|col| self.cell(row, col).is_blank()))
    }
}

/// Rectangular in-memory grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryGrid {
    rows: Vec<Vec<CellValue>>,
    columns: usize,
}

impl MemoryGrid {
    /// Build a grid from ragged rows; short rows are padded with empty cells.
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(columns, CellValue::Empty);
        }
        Self { rows, columns }
    }

    /// Empty grid of the given shape.
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![CellValue::Empty; columns]; rows],
            columns,
        }
    }

    /// Set a cell inside the grid; out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *slot = value;
        }
    }
}

impl SheetGrid for MemoryGrid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}
