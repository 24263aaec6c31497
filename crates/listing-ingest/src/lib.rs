//! Listing file ingestion.
//!
//! Loads an uploaded listing file (CSV or spreadsheet workbook) into ordered
//! row records per sheet, and picks the sheet that holds the listings.
//!
//! # Features
//!
//! - **CSV Loading**: Polars reader with every column kept as text
//! - **Workbook Loading**: xlsx, xlsm, xlsb, xls and ods through calamine
//! - **Sheet Selection**: priority names, then widest sheet, or an explicit name
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listing_ingest::{load_path, select_sheet};
//!
//! let file = load_path(Path::new("listings.xlsx"))?;
//! let sheet = select_sheet(&file, None)?;
//! println!("{} rows in {}", sheet.row_count(), sheet.name);
//! ```

mod csv;
mod error;
mod format;
mod loader;
mod selection;
mod sheet;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use format::FileFormat;
pub use loader::{load_bytes, load_path};
pub use sheet::{Sheet, TabularFile};

// === Sheet Selection ===
pub use selection::{SHEET_PRIORITY, detect_best_sheet, select_sheet};

// === Cell Conversion ===
pub use csv::any_to_cell;
pub use workbook::data_to_cell;
