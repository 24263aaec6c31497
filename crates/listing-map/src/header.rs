//! Case-insensitive header matching.
//!
//! Every header comparison in the pipeline goes through [`normalize_header`]
//! and a [`HeaderIndex`] built once per row collection.

use std::collections::HashMap;

use listing_model::{CellValue, Record};

/// Normalizes a header for comparison: trimmed and lowercased.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Index from normalized header to the original header text.
///
/// When several headers normalize to the same key, the first one seen wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    map: HashMap<String, String>,
}

impl HeaderIndex {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for header in headers {
            let header = header.as_ref();
            map.entry(normalize_header(header))
                .or_insert_with(|| header.to_string());
        }
        Self { map }
    }

    /// Builds an index over the union of headers across all records.
    pub fn from_records(records: &[Record]) -> Self {
        Self::new(records.iter().flat_map(Record::headers))
    }

    /// Returns the original header equivalent to `name`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.map.get(&normalize_header(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&normalize_header(name))
    }

    /// Number of distinct normalized headers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the record's value under the header equivalent to `column`.
    ///
    /// Rows of one collection may spell a header differently; when the
    /// indexed spelling is absent from `record`, the record's own first
    /// equivalent header is used.
    pub fn lookup<'a>(&self, record: &'a Record, column: &str) -> Option<&'a CellValue> {
        let header = self.resolve(column)?;
        record.get(header).or_else(|| {
            let key = normalize_header(column);
            record
                .iter()
                .find(|(candidate, _)| normalize_header(candidate) == key)
                .map(|(_, value)| value)
        })
    }

    /// Like [`HeaderIndex::lookup`], but only returns non-blank values.
    pub fn lookup_filled<'a>(&self, record: &'a Record, column: &str) -> Option<&'a CellValue> {
        self.lookup(record, column).filter(|value| !value.is_blank())
    }
}
