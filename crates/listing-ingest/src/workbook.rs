//! Workbook reading through calamine.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::NaiveDateTime;

use listing_model::{CellValue, format_numeric};

use crate::error::{IngestError, Result};
use crate::sheet::Sheet;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads every sheet of a workbook, in workbook order.
///
/// The first row of each sheet is its header row.
pub(crate) fn read_workbook_sheets(bytes: Vec<u8>, path: &Path) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| {
        IngestError::WorkbookParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| IngestError::WorkbookParse {
                path: path.to_path_buf(),
                source,
            })?;
        let sheet = range_to_sheet(&name, &range);
        tracing::debug!(
            sheet = %name,
            rows = sheet.row_count(),
            columns = sheet.column_count(),
            "read worksheet"
        );
        sheets.push(sheet);
    }
    Ok(sheets)
}

fn range_to_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Sheet {
            name: name.to_string(),
            ..Sheet::default()
        };
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();
    let values = rows.map(|row| row.iter().map(data_to_cell).collect::<Vec<_>>());
    Sheet::from_rows(name, headers, values)
}

fn header_text(cell: &Data) -> String {
    data_to_cell(cell).to_text()
}

/// Converts a calamine cell to a cell value.
///
/// Dates become `YYYY-MM-DD HH:MM:SS` text; error cells become empty.
pub fn data_to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::text(format_datetime(value)),
            None => CellValue::text(format_numeric(dt.as_f64())),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
    }
}

fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
