//! Tabular file loading.

use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use crate::csv::read_csv_sheet;
use crate::error::{IngestError, Result};
use crate::format::FileFormat;
use crate::sheet::{Sheet, TabularFile};
use crate::workbook::read_workbook_sheets;

/// Loads a CSV or workbook file from disk.
pub fn load_path(path: &Path) -> Result<TabularFile> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_bytes(&name, bytes)
}

/// Loads a CSV or workbook from in-memory bytes.
///
/// `name` is the original file name; its extension selects the parser and
/// CSV input is loaded as one sheet named after the file stem.
pub fn load_bytes(name: &str, bytes: Vec<u8>) -> Result<TabularFile> {
    let span = info_span!("load", file = %name);
    let _guard = span.enter();
    let start = Instant::now();
    let path = Path::new(name);

    if bytes.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let format = FileFormat::detect(name, &bytes);
    let sheets = match format {
        FileFormat::Csv => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            vec![read_csv_sheet(&stem, &bytes, path)?]
        }
        FileFormat::Workbook => read_workbook_sheets(bytes, path)?,
    };

    info!(
        format = format.label(),
        sheets = sheets.len(),
        rows = sheets.iter().map(Sheet::row_count).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "loaded file"
    );

    Ok(TabularFile {
        name: name.to_string(),
        format,
        sheets,
    })
}
