//! Analysis workbook output.
//!
//! # Features
//!
//! - **Sheet tables**: canonical and derived rows laid out in column order
//! - **Styling**: shared header/body formats and sampled column sizing
//! - **Emission**: in-memory xlsx bytes with frozen headers and auto-filters
//! - **Naming**: `<base>_ANALYSIS.xlsx` output file names

mod error;
mod naming;
mod sheet;
mod style;
mod workbook;

// === Errors ===
pub use error::{OutputError, Result};

// === Tables ===
pub use sheet::{SheetTable, export_tables};

// === Styling ===
pub use style::{
    AUTOFIT_MAX_CHARS, AUTOFIT_MAX_WIDTH, AUTOFIT_PADDING, AUTOFIT_SAMPLE_ROWS, SheetStyles,
    body_format, column_width, header_format,
};

// === Emission ===
pub use naming::analysis_file_name;
pub use workbook::{emit_export, write_workbook};
