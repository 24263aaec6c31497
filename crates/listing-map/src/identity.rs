//! Item identity helpers.
//!
//! The item identity correlates source rows, supplemental rows and derived
//! sheet rows. Lookup keys are compared trimmed and uppercased.

use std::collections::BTreeSet;

use listing_model::{CellValue, Record, SUPPLEMENTAL_KEY_HEADERS, columns};

use crate::header::HeaderIndex;

/// Builds a lookup key from a cell: its text trimmed and uppercased.
///
/// Returns `None` for blank cells.
pub fn identity_key(value: &CellValue) -> Option<String> {
    let text = value.to_text();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

/// Returns the row's item identity cell (the `ITEM` column under any casing).
pub fn item_identity<'a>(record: &'a Record, index: &HeaderIndex) -> Option<&'a CellValue> {
    index.lookup_filled(record, columns::ITEM)
}

/// Where a supplemental row's lookup key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// One of the known identity headers.
    Header(&'static str),
    /// No identity header carried a value; the row's first value was used.
    FirstValue,
}

/// Resolves the lookup key of a supplemental row.
///
/// Tries `ITEM`, `SKU` and `Listing SKU` (any casing) in order, then falls
/// back to the first value of the row. The fallback is positional and only
/// meaningful when the identity sits in the first column; callers should
/// surface it.
pub fn supplemental_key(record: &Record, index: &HeaderIndex) -> Option<(String, KeyOrigin)> {
    for header in SUPPLEMENTAL_KEY_HEADERS {
        if let Some(key) = index.lookup(record, header).and_then(identity_key) {
            return Some((key, KeyOrigin::Header(header)));
        }
    }
    record
        .first_value()
        .and_then(identity_key)
        .map(|key| (key, KeyOrigin::FirstValue))
}

/// Sorted distinct item identities of a row collection, trimmed.
pub fn unique_items(rows: &[Record]) -> Vec<String> {
    let index = HeaderIndex::from_records(rows);
    let items: BTreeSet<String> = rows
        .iter()
        .filter_map(|row| item_identity(row, &index))
        .map(|value| value.to_text().trim().to_string())
        .collect();
    items.into_iter().collect()
}
