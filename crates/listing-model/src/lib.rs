//! Listing analysis data model.
//!
//! Shared types for every stage of the analysis pipeline: the fixed target
//! schema, loosely typed cell values, ordered row records, canonical rows and
//! the per-run configuration.

pub mod canonical;
pub mod config;
pub mod error;
pub mod record;
pub mod schema;
pub mod value;

// === Errors ===
pub use error::{ModelError, Result};

// === Values and Rows ===
pub use canonical::CanonicalRow;
pub use record::Record;
pub use value::{CellValue, format_numeric};

// === Schema ===
pub use schema::{
    FieldKind, ITEM_SHEET_DEFAULTS, SUPPLEMENTAL_FIELDS, SUPPLEMENTAL_KEY_HEADERS,
    SupplementalField, TARGET_COLUMN_COUNT, TARGET_COLUMNS, column_index, columns,
    is_target_column, sheets,
};

// === Configuration ===
pub use config::RunConfig;
