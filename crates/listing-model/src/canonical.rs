//! Rows normalized to the target schema.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::record::Record;
use crate::schema::{TARGET_COLUMN_COUNT, TARGET_COLUMNS, column_index, columns};
use crate::value::CellValue;

/// A row holding exactly the target columns, in schema order.
///
/// Every column carries a value; unresolved columns hold the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRow {
    values: Vec<CellValue>,
}

impl CanonicalRow {
    /// Creates a row with every column set to the empty string.
    pub fn empty() -> Self {
        Self {
            values: vec![CellValue::empty_text(); TARGET_COLUMN_COUNT],
        }
    }

    /// Builds a row from values in schema order.
    ///
    /// Missing trailing values are filled with the empty string; extra
    /// values are dropped.
    pub fn from_values(values: impl IntoIterator<Item = CellValue>) -> Self {
        let mut row = Self::empty();
        for (slot, value) in row.values.iter_mut().zip(values) {
            *slot = value;
        }
        row
    }

    /// Returns the value of a target column, or `None` for unknown columns.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        column_index(column).map(|idx| &self.values[idx])
    }

    /// Returns the value of a target column, or an empty cell for unknown
    /// columns.
    pub fn value(&self, column: &str) -> CellValue {
        self.get(column).cloned().unwrap_or_default()
    }

    /// Sets a target column. Unknown columns are ignored and reported as `false`.
    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) -> bool {
        match column_index(column) {
            Some(idx) => {
                self.values[idx] = value.into();
                true
            }
            None => false,
        }
    }

    /// The `ITEM` value of this row.
    pub fn item(&self) -> &CellValue {
        &self.values[0]
    }

    /// Values in schema order.
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Iterates `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CellValue)> {
        TARGET_COLUMNS.iter().copied().zip(self.values.iter())
    }

    /// Converts the row into a [`Record`] with the schema's header order.
    pub fn to_record(&self) -> Record {
        self.iter()
            .map(|(column, value)| (column, value.clone()))
            .collect()
    }

    /// Returns true if the `Blocked` column holds boolean `false`.
    pub fn is_unblocked(&self) -> bool {
        matches!(self.get(columns::BLOCKED), Some(CellValue::Bool(false)))
    }
}

impl Default for CanonicalRow {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for CanonicalRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TARGET_COLUMN_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
