//! XLSX writer for the cleaned table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use stock_model::{PRIMARY_SHEET_NAME, Period, big_customer_sheet_name};
use stock_transform::big_customer_subset;

/// What was written for one input report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSummary {
    pub path: PathBuf,
    /// Rows on the primary sheet.
    pub rows: usize,
    /// Rows on the big-customer sheet (0 when the sheet was not written).
    pub big_customer_rows: usize,
    pub sheets: Vec<String>,
}

enum OutputCell<'a> {
    Blank,
    Text(&'a str),
    Number(f64),
}

/// File name of the cleaned workbook for a period, e.g. `2025-07_cleaned.xlsx`.
pub fn output_file_name(period: &Period) -> String {
    format!("{period}_cleaned.xlsx")
}

/// Write the cleaned table to `path`.
///
/// The primary sheet holds every row; the big-customer sheet is added only
/// when at least one remark carries the marker.
pub fn write_cleaned_workbook(path: &Path, frame: &DataFrame) -> Result<WorkbookSummary> {
    let subset = big_customer_subset(frame).context("filter big-customer rows")?;
    let header_format = Format::new().set_bold();

    let mut workbook = Workbook::new();
    let mut sheets = vec![PRIMARY_SHEET_NAME.to_string()];
    write_frame_sheet(
        workbook.add_worksheet(),
        PRIMARY_SHEET_NAME,
        frame,
        &header_format,
    )?;

    if subset.height() > 0 {
        let name = big_customer_sheet_name(PRIMARY_SHEET_NAME);
        write_frame_sheet(workbook.add_worksheet(), &name, &subset, &header_format)?;
        tracing::info!(
            sheet = %name,
            rows = subset.height(),
            "extracted big-customer rows"
        );
        sheets.push(name);
    }

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(WorkbookSummary {
        path: path.to_path_buf(),
        rows: frame.height(),
        big_customer_rows: subset.height(),
        sheets,
    })
}

fn write_frame_sheet(
    worksheet: &mut Worksheet,
    name: &str,
    frame: &DataFrame,
    header_format: &Format,
) -> Result<()> {
    worksheet
        .set_name(name)
        .with_context(|| format!("name sheet {name}"))?;

    for (col_idx, column) in frame.get_columns().iter().enumerate() {
        let col = cast_col_num(col_idx)?;
        worksheet.write_string_with_format(0, col, column.name().as_str(), header_format)?;
        for row_idx in 0..frame.height() {
            let row = cast_row_num(row_idx + 1)?;
            let value = column
                .get(row_idx)
                .with_context(|| format!("read {} row {row_idx}", column.name()))?;
            match output_cell(&value) {
                OutputCell::Blank => {}
                OutputCell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                OutputCell::Number(number) => {
                    worksheet.write_number(row, col, number)?;
                }
            }
        }
    }
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();
    Ok(())
}

fn output_cell<'a>(value: &'a AnyValue<'_>) -> OutputCell<'a> {
    match value {
        AnyValue::Null => OutputCell::Blank,
        AnyValue::String(text) => OutputCell::Text(text),
        AnyValue::StringOwned(text) => OutputCell::Text(text.as_str()),
        AnyValue::Float64(v) => OutputCell::Number(*v),
        AnyValue::Float32(v) => OutputCell::Number(f64::from(*v)),
        AnyValue::Int64(v) => OutputCell::Number(*v as f64),
        AnyValue::Int32(v) => OutputCell::Number(f64::from(*v)),
        AnyValue::UInt32(v) => OutputCell::Number(f64::from(*v)),
        _ => OutputCell::Blank,
    }
}

fn cast_row_num(value: usize) -> Result<u32> {
    u32::try_from(value).with_context(|| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16> {
    u16::try_from(value).with_context(|| format!("column index overflow: {value}"))
}
