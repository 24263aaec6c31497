//! Error types for tabular input loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a listing file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// File has no content.
    #[error("file is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}: only UTF-8 is supported")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {source}")]
    WorkbookParse {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    // === Sheet Selection Errors ===
    /// Workbook has no sheet to select.
    #[error("no usable sheet in {path}")]
    NoUsableSheet { path: PathBuf },

    /// An explicitly requested sheet does not exist.
    #[error("sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
}

impl IngestError {
    /// Returns true if the input could not be parsed as tabular data at all.
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::FileRead { .. }
                | Self::EmptyInput { .. }
                | Self::UnsupportedEncoding { .. }
                | Self::CsvParse { .. }
                | Self::WorkbookParse { .. }
        )
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/listings.xlsx"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/listings.xlsx");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            sheet: "Data".to_string(),
            available: vec!["Sheet1".to_string(), "Notes".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Data' not found (available: Sheet1, Notes)"
        );
        assert!(!err.is_unreadable());
    }

    #[test]
    fn test_not_found_io_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::read("missing.csv", io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
        assert!(err.is_unreadable());
    }
}
