//! Input format detection.

use std::path::Path;

/// Container format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text, read as a single sheet.
    Csv,
    /// Spreadsheet workbook (xlsx, xlsm, xlsb, xls, ods).
    Workbook,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const CSV_EXTENSIONS: &[&str] = &["csv", "txt"];

/// ZIP container (xlsx, xlsm, xlsb, ods).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// OLE compound document (legacy xls).
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

impl FileFormat {
    /// Detects the format from the file extension, falling back to the
    /// leading bytes when the extension is missing or unknown.
    pub fn detect(name: &str, bytes: &[u8]) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext) => Self::Workbook,
            Some(ext) if CSV_EXTENSIONS.contains(&ext) => Self::Csv,
            _ => Self::sniff(bytes),
        }
    }

    fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
            Self::Workbook
        } else {
            Self::Csv
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Workbook => "workbook",
        }
    }
}
