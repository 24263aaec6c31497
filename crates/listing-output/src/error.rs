//! Error types for workbook emission.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that can occur while writing the analysis workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The xlsx writer rejected a sheet, cell or format.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),

    // === Layout Errors ===
    /// Sheet has more rows than a worksheet can hold.
    #[error("row index overflow in sheet '{sheet}': {index}")]
    RowOverflow { sheet: String, index: usize },

    /// Sheet has more columns than a worksheet can hold.
    #[error("column index overflow in sheet '{sheet}': {index}")]
    ColumnOverflow { sheet: String, index: usize },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
