//! Supplemental per-item lookup table.

use std::collections::HashMap;

use tracing::{debug, warn};

use listing_map::{HeaderIndex, KeyOrigin, supplemental_key};
use listing_model::{CellValue, Record};

/// Supplemental rows keyed by trimmed, uppercased item identity.
///
/// When two rows share a key, the later row replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct SupplementalTable {
    rows: HashMap<String, Record>,
    index: HeaderIndex,
    positional_keys: usize,
}

impl SupplementalTable {
    /// Builds the table from supplemental rows.
    ///
    /// Rows without any usable key are dropped. Rows keyed by their first
    /// value (no identity header carried a value) are counted and logged,
    /// since that key depends on column order.
    pub fn from_records(records: &[Record]) -> Self {
        let index = HeaderIndex::from_records(records);
        let mut rows = HashMap::new();
        let mut positional_keys = 0;
        let mut unkeyed = 0;
        for record in records {
            match supplemental_key(record, &index) {
                Some((key, origin)) => {
                    if origin == KeyOrigin::FirstValue {
                        positional_keys += 1;
                    }
                    rows.insert(key, record.clone());
                }
                None => unkeyed += 1,
            }
        }

        if positional_keys > 0 {
            warn!(
                rows = positional_keys,
                "supplemental rows without ITEM/SKU/Listing SKU were keyed by their first column"
            );
        }
        debug!(
            rows = records.len(),
            keys = rows.len(),
            unkeyed,
            "built supplemental table"
        );

        Self {
            rows,
            index,
            positional_keys,
        }
    }

    /// Returns the row stored under a lookup key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.rows.get(key)
    }

    /// Returns the non-blank value of `column` (any casing) for a key.
    pub fn lookup(&self, key: &str, column: &str) -> Option<&CellValue> {
        self.get(key)
            .and_then(|record| self.index.lookup_filled(record, column))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows keyed by their first value.
    pub fn positional_keys(&self) -> usize {
        self.positional_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let table = SupplementalTable::from_records(&[
            Record::new().with("item", " a1 ").with("Weight", 4.2),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("A1", "WEIGHT"), Some(&CellValue::Number(4.2)));
        assert_eq!(table.lookup("a1", "Weight"), None);
    }

    #[test]
    fn later_rows_replace_earlier() {
        let table = SupplementalTable::from_records(&[
            Record::new().with("SKU", "A1").with("Vendor", "Old"),
            Record::new().with("SKU", "a1").with("Vendor", "New"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("A1", "Vendor"), Some(&CellValue::text("New")));
    }

    #[test]
    fn blank_values_are_not_returned() {
        let table =
            SupplementalTable::from_records(&[Record::new().with("ITEM", "A1").with("Brand", "  ")]);
        assert_eq!(table.lookup("A1", "Brand"), None);
    }

    #[test]
    fn positional_keys_are_counted() {
        let table = SupplementalTable::from_records(&[
            Record::new().with("Part", "P1").with("Brand", "Acme"),
            Record::new().with("Part", "").with("Brand", "Acme"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.positional_keys(), 1);
        assert_eq!(table.lookup("P1", "brand"), Some(&CellValue::text("Acme")));
    }
}
