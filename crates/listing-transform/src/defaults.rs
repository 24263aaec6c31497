//! Global default values applied to every row.

use std::collections::BTreeMap;

use tracing::warn;

use listing_map::HeaderIndex;
use listing_model::{CellValue, TARGET_COLUMNS};

/// Default values keyed by target column.
///
/// Keys are resolved against the target schema with the same header
/// normalization used for source rows. Blank values are dropped, so a
/// column with a blank default falls through to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalDefaults {
    values: BTreeMap<&'static str, CellValue>,
}

impl GlobalDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds defaults from `(column, value)` pairs as written by the user.
    ///
    /// Unknown columns are skipped with a warning.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let schema = HeaderIndex::new(TARGET_COLUMNS);
        let mut values = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();
            let Some(column) = schema.resolve(key) else {
                warn!(column = %key, "ignoring default for unknown column");
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            if let Some(target) = TARGET_COLUMNS.iter().copied().find(|c| *c == column) {
                values.insert(target, CellValue::text(value));
            }
        }
        Self { values }
    }

    /// Returns the default for a target column (exact name).
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    /// Iterates defaults in column name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CellValue)> {
        self.values.iter().map(|(column, value)| (*column, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve_case_insensitively() {
        let defaults = GlobalDefaults::from_pairs([(" unit cost", "12.50"), ("VENDOR", "Acme")]);
        assert_eq!(defaults.get("Unit Cost"), Some(&CellValue::text("12.50")));
        assert_eq!(defaults.get("Vendor"), Some(&CellValue::text("Acme")));
        assert_eq!(defaults.len(), 2);
    }

    #[test]
    fn unknown_and_blank_defaults_are_dropped() {
        let defaults = GlobalDefaults::from_pairs([("Color", "Red"), ("Brand", "   ")]);
        assert!(defaults.is_empty());
    }

    #[test]
    fn values_are_kept_verbatim() {
        let defaults = GlobalDefaults::from_pairs([("Keywords", " turbo, diesel ")]);
        assert_eq!(
            defaults.get("Keywords"),
            Some(&CellValue::text(" turbo, diesel "))
        );
    }
}
