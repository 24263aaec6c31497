//! Row reconciliation into the target schema.

use serde::Serialize;
use tracing::{debug, info_span};

use listing_map::{HeaderIndex, identity_key, item_identity};
use listing_model::{CanonicalRow, CellValue, Record, TARGET_COLUMNS, columns};

use crate::defaults::GlobalDefaults;
use crate::resolver::{ResolverChain, RowContext, ValueSource};
use crate::supplemental::SupplementalTable;

/// Per-source value counts for one target column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub source: usize,
    pub supplemental: usize,
    pub global_default: usize,
    pub empty: usize,
}

impl SourceCounts {
    fn record(&mut self, source: ValueSource) {
        match source {
            ValueSource::Source => self.source += 1,
            ValueSource::Supplemental => self.supplemental += 1,
            ValueSource::GlobalDefault => self.global_default += 1,
            ValueSource::Empty => self.empty += 1,
        }
    }

    /// Total values counted.
    pub fn total(&self) -> usize {
        self.source + self.supplemental + self.global_default + self.empty
    }

    fn add(&mut self, other: &SourceCounts) {
        self.source += other.source;
        self.supplemental += other.supplemental;
        self.global_default += other.global_default;
        self.empty += other.empty;
    }
}

/// Provenance of one target column across all reconciled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProvenance {
    pub column: &'static str,
    #[serde(flatten)]
    pub counts: SourceCounts,
}

/// Which resolver supplied each canonical value, counted per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillProvenance {
    columns: Vec<ColumnProvenance>,
}

impl Default for FillProvenance {
    fn default() -> Self {
        Self {
            columns: TARGET_COLUMNS
                .iter()
                .copied()
                .map(|column| ColumnProvenance {
                    column,
                    counts: SourceCounts::default(),
                })
                .collect(),
        }
    }
}

impl FillProvenance {
    /// Per-column counts in schema order.
    pub fn columns(&self) -> &[ColumnProvenance] {
        &self.columns
    }

    /// Counts for one target column (exact name).
    pub fn column(&self, column: &str) -> Option<&SourceCounts> {
        self.columns
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| &entry.counts)
    }

    /// Counts summed over every column.
    pub fn totals(&self) -> SourceCounts {
        let mut totals = SourceCounts::default();
        for entry in &self.columns {
            totals.add(&entry.counts);
        }
        totals
    }
}

/// Canonical rows plus the provenance of their values.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub rows: Vec<CanonicalRow>,
    pub provenance: FillProvenance,
}

/// Reconciles source rows into canonical rows, one per source row, in order.
///
/// Each target column takes the first non-blank value from the source row,
/// the supplemental row for the item, or the global default, and otherwise
/// the empty string. A falsy `Blocked` becomes boolean `false`.
pub fn reconcile(
    source: &[Record],
    supplemental: Option<&SupplementalTable>,
    defaults: &GlobalDefaults,
) -> Vec<CanonicalRow> {
    reconcile_with_provenance(source, supplemental, defaults).rows
}

/// Like [`reconcile`], also counting where each value came from.
pub fn reconcile_with_provenance(
    source: &[Record],
    supplemental: Option<&SupplementalTable>,
    defaults: &GlobalDefaults,
) -> Reconciliation {
    let span = info_span!("reconcile", rows = source.len());
    let _guard = span.enter();

    let index = HeaderIndex::from_records(source);
    let chain = ResolverChain::standard(supplemental, defaults);
    let mut provenance = FillProvenance::default();
    let mut rows = Vec::with_capacity(source.len());
    let mut without_identity = 0usize;

    for record in source {
        let item_key = item_identity(record, &index).and_then(identity_key);
        if item_key.is_none() {
            without_identity += 1;
        }
        let row = RowContext {
            record,
            index: &index,
            item_key: item_key.as_deref(),
        };

        let mut values = Vec::with_capacity(TARGET_COLUMNS.len());
        for (column, entry) in TARGET_COLUMNS.iter().zip(provenance.columns.iter_mut()) {
            let resolved = chain.resolve(&row, column);
            entry.counts.record(resolved.source);
            let value = if *column == columns::BLOCKED && resolved.value.is_falsy() {
                CellValue::Bool(false)
            } else {
                resolved.value
            };
            values.push(value);
        }
        rows.push(CanonicalRow::from_values(values));
    }

    debug!(
        rows = rows.len(),
        without_identity,
        supplemental_keys = supplemental.map_or(0, SupplementalTable::len),
        defaults = defaults.len(),
        "reconciled rows"
    );

    Reconciliation { rows, provenance }
}
