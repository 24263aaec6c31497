//! Scalar cell values.
//!
//! Source sheets arrive with loosely typed cells: text, numbers, booleans or
//! nothing at all. [`CellValue`] keeps that shape intact from ingest through
//! to the emitted workbook so numbers stay numbers and flags stay flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent or null cell.
    #[default]
    Empty,
    /// Boolean cell (`TRUE` / `FALSE`).
    Bool(bool),
    /// Numeric cell.
    Number(f64),
    /// Text cell, stored as read (no trimming).
    Text(String),
}

impl CellValue {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The explicit empty string used to fill unresolved canonical columns.
    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    /// Returns true when the cell carries no usable value.
    ///
    /// A cell is blank when it is absent, or when its text form is empty
    /// after trimming. Booleans and finite numbers (including zero) are
    /// never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bool(_) => false,
            Self::Number(value) => value.is_nan(),
            Self::Text(value) => value.trim().is_empty(),
        }
    }

    /// Returns true for values that count as "unset" for flag columns:
    /// absent, the empty string, zero, or `false`.
    ///
    /// Whitespace-only text is not falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bool(value) => !value,
            Self::Number(value) => *value == 0.0 || value.is_nan(),
            Self::Text(value) => value.is_empty(),
        }
    }

    /// Returns the text payload, if this is a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the text form of the cell (empty string for absent cells).
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Number(value) => f.write_str(&format_numeric(*value)),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Formats a floating-point number without trailing zeros after the decimal.
///
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use listing_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}
