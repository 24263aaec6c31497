//! Workbook emission.
//!
//! Every sheet gets a styled header row, a frozen first row, an auto-filter
//! over the data range and sized columns. The workbook is returned as bytes;
//! writing it to disk is left to the caller.

use std::time::Instant;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info, info_span};

use listing_model::CellValue;
use listing_transform::ExportBundle;

use crate::error::{OutputError, Result};
use crate::sheet::{SheetTable, export_tables};
use crate::style::{SheetStyles, column_width};

/// Writes the tables as worksheets, in order, and returns the xlsx bytes.
pub fn write_workbook(tables: &[SheetTable]) -> Result<Vec<u8>> {
    let styles = SheetStyles::new();
    let mut workbook = Workbook::new();
    for table in tables {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, table, &styles)?;
        debug!(
            sheet = %table.name,
            rows = table.row_count(),
            columns = table.column_count(),
            "wrote sheet"
        );
    }
    Ok(workbook.save_to_buffer()?)
}

/// Writes the analysis workbook for an export bundle.
pub fn emit_export(bundle: &ExportBundle) -> Result<Vec<u8>> {
    let span = info_span!("emit", source = %bundle.source_name);
    let _guard = span.enter();
    let start = Instant::now();

    let tables = export_tables(bundle);
    let bytes = write_workbook(&tables)?;

    info!(
        sheets = tables.len(),
        bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "emitted workbook"
    );
    Ok(bytes)
}

fn write_sheet(worksheet: &mut Worksheet, table: &SheetTable, styles: &SheetStyles) -> Result<()> {
    worksheet.set_name(table.name.as_str())?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        let col = cast_col_num(table, col_idx)?;
        worksheet.write_string_with_format(0, col, header.as_str(), &styles.header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = cast_row_num(table, row_idx + 1)?;
        for (col_idx, value) in row.iter().enumerate() {
            let col = cast_col_num(table, col_idx)?;
            write_cell(worksheet, row_num, col, value, &styles.body)?;
        }
    }

    if table.columns.is_empty() {
        return Ok(());
    }

    let last_col = cast_col_num(table, table.column_count() - 1)?;
    let last_row = cast_row_num(table, table.row_count())?;
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(0, 0, last_row, last_col)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        let width = column_width(header, table.rows.iter().filter_map(|row| row.get(col_idx)));
        worksheet.set_column_width(cast_col_num(table, col_idx)?, width)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> Result<()> {
    match value {
        CellValue::Empty => worksheet.write_blank(row, col, format)?,
        CellValue::Bool(flag) => worksheet.write_boolean_with_format(row, col, *flag, format)?,
        CellValue::Number(number) if number.is_finite() => {
            worksheet.write_number_with_format(row, col, *number, format)?
        }
        CellValue::Number(_) => worksheet.write_blank(row, col, format)?,
        CellValue::Text(text) => {
            worksheet.write_string_with_format(row, col, text.as_str(), format)?
        }
    };
    Ok(())
}

fn cast_row_num(table: &SheetTable, index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| OutputError::RowOverflow {
        sheet: table.name.clone(),
        index,
    })
}

fn cast_col_num(table: &SheetTable, index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| OutputError::ColumnOverflow {
        sheet: table.name.clone(),
        index,
    })
}
