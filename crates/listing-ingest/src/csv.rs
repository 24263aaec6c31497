//! CSV reading through Polars.
//!
//! Every column is read as text so item numbers and UPCs keep their leading
//! zeros.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use listing_model::CellValue;

use crate::error::{IngestError, Result};
use crate::sheet::Sheet;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Rejects UTF-16 input and strips a UTF-8 BOM.
pub(crate) fn strip_bom<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a [u8]> {
    if bytes.starts_with(UTF16_LE_BOM) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(UTF16_BE_BOM) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    Ok(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}

/// Reads CSV bytes into a single sheet.
pub(crate) fn read_csv_sheet(sheet_name: &str, bytes: &[u8], path: &Path) -> Result<Sheet> {
    let content = strip_bom(bytes, path)?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(content.to_vec()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(frame_to_sheet(sheet_name, &df))
}

/// Converts a DataFrame into a sheet, row by row.
pub(crate) fn frame_to_sheet(sheet_name: &str, df: &DataFrame) -> Sheet {
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let columns = df.get_columns();
    let rows = (0..df.height()).map(|row_idx| {
        columns
            .iter()
            .map(|column| column.get(row_idx).map(any_to_cell).unwrap_or_default())
            .collect::<Vec<_>>()
    });
    Sheet::from_rows(sheet_name, headers, rows)
}

/// Converts a Polars `AnyValue` to a cell.
///
/// Nulls become empty cells, numeric types become numbers, and anything
/// else is carried as its text form.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Number(v),
        AnyValue::String(s) => CellValue::text(s),
        AnyValue::StringOwned(s) => CellValue::text(s.as_str()),
        other => {
            let s = other.to_string();
            // Display wraps some values in quotes
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                CellValue::text(&s[1..s.len() - 1])
            } else {
                CellValue::text(s)
            }
        }
    }
}
