//! Ordered row records keyed by header.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::CellValue;

/// One row of a source or derived sheet.
///
/// Fields keep their insertion order: the order of headers in the source
/// sheet, or the column order a derived sheet is written with. Header lookup
/// through [`Record::get`] is exact; case-insensitive matching goes through
/// a header index built over the record's headers.
///
/// Serializes as a map in header order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets a field, replacing the value in place if the header already exists.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        let header = header.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == header) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((header, value)),
        }
    }

    /// Builder-style variant of [`Record::insert`].
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(header, value);
        self
    }

    /// Returns the value stored under exactly `header`.
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value)
    }

    /// Returns the first value of the record in header order.
    pub fn first_value(&self) -> Option<&CellValue> {
        self.fields.first().map(|(_, value)| value)
    }

    /// Iterates headers in order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(header, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if every value in the record is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_blank())
    }
}

impl<H, V> FromIterator<(H, V)> for Record
where
    H: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (header, value) in iter {
            record.insert(header, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (header, value) in &self.fields {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header to cell value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((header, value)) = access.next_entry::<String, CellValue>()? {
                    record.insert(header, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
