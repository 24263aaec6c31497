//! Field coverage analysis.
//!
//! For each target column, finds the matching source header (if any) and
//! measures how many rows carry a non-blank value under it.

use serde::Serialize;

use listing_model::{Record, TARGET_COLUMNS};

use crate::header::HeaderIndex;

/// Coverage category of a target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStatus {
    /// No matching header, or a header with no values.
    Missing,
    /// Some rows carry a value.
    Partial,
    /// Nearly every row carries a value.
    Complete,
}

impl FillStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Missing => "missing",
        }
    }
}

/// Boundary between partial and complete coverage.
///
/// A ratio strictly greater than `complete` is complete; any other positive
/// ratio is partial; zero is missing.
#[derive(Debug, Clone, Copy)]
pub struct FillThresholds {
    /// Ratio above which a column counts as complete (default: 0.8).
    pub complete: f64,
}

impl Default for FillThresholds {
    fn default() -> Self {
        Self { complete: 0.8 }
    }
}

impl FillThresholds {
    #[must_use]
    pub fn categorize(&self, fill_ratio: f64) -> FillStatus {
        if fill_ratio > self.complete {
            FillStatus::Complete
        } else if fill_ratio > 0.0 {
            FillStatus::Partial
        } else {
            FillStatus::Missing
        }
    }
}

/// A target column matched to a source header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedField {
    pub column: String,
    pub source_header: String,
    pub fill_ratio: f64,
}

/// Coverage of every target column over one row collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldAnalysis {
    pub total_rows: usize,
    pub complete: Vec<MatchedField>,
    pub partial: Vec<MatchedField>,
    pub missing: Vec<String>,
}

impl FieldAnalysis {
    /// Returns the coverage category of a target column (exact name).
    pub fn status(&self, column: &str) -> FillStatus {
        if self.complete.iter().any(|f| f.column == column) {
            FillStatus::Complete
        } else if self.partial.iter().any(|f| f.column == column) {
            FillStatus::Partial
        } else {
            FillStatus::Missing
        }
    }

    /// Returns true if the column is missing or partial.
    pub fn needs_fill(&self, column: &str) -> bool {
        self.status(column) != FillStatus::Complete
    }

    /// Missing and partial columns, in schema order.
    pub fn columns_needing_fill(&self) -> Vec<&'static str> {
        TARGET_COLUMNS
            .iter()
            .copied()
            .filter(|column| self.needs_fill(column))
            .collect()
    }
}

/// Analyzes coverage with the default thresholds.
pub fn analyze(rows: &[Record]) -> FieldAnalysis {
    analyze_with(rows, FillThresholds::default())
}

/// Analyzes coverage of every target column over `rows`.
pub fn analyze_with(rows: &[Record], thresholds: FillThresholds) -> FieldAnalysis {
    let mut analysis = FieldAnalysis {
        total_rows: rows.len(),
        ..FieldAnalysis::default()
    };
    if rows.is_empty() {
        analysis.missing = TARGET_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        return analysis;
    }

    let index = HeaderIndex::from_records(rows);
    for column in TARGET_COLUMNS {
        let Some(source_header) = index.resolve(column) else {
            analysis.missing.push(column.to_string());
            continue;
        };
        let filled = rows
            .iter()
            .filter(|row| row.get(source_header).is_some_and(|v| !v.is_blank()))
            .count();
        let fill_ratio = filled as f64 / rows.len() as f64;
        let matched = MatchedField {
            column: column.to_string(),
            source_header: source_header.to_string(),
            fill_ratio,
        };
        match thresholds.categorize(fill_ratio) {
            FillStatus::Complete => analysis.complete.push(matched),
            FillStatus::Partial => analysis.partial.push(matched),
            FillStatus::Missing => analysis.missing.push(matched.column),
        }
    }

    tracing::debug!(
        rows = analysis.total_rows,
        complete = analysis.complete.len(),
        partial = analysis.partial.len(),
        missing = analysis.missing.len(),
        "analyzed field coverage"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with_vendor(filled: usize, total: usize) -> Vec<Record> {
        (0..total)
            .map(|i| {
                let vendor = if i < filled { "Acme" } else { "" };
                Record::new().with("Item", format!("A{i}")).with("vendor", vendor)
            })
            .collect()
    }

    #[test]
    fn empty_collection_is_all_missing() {
        let analysis = analyze(&[]);
        assert_eq!(analysis.total_rows, 0);
        assert_eq!(analysis.missing.len(), TARGET_COLUMNS.len());
        assert!(analysis.complete.is_empty());
        assert!(analysis.partial.is_empty());
    }

    #[test]
    fn exactly_eighty_percent_is_partial() {
        let analysis = analyze(&rows_with_vendor(4, 5));
        assert_eq!(analysis.status("Vendor"), FillStatus::Partial);
        let vendor = &analysis.partial[0];
        assert_eq!(vendor.source_header, "vendor");
        assert!((vendor.fill_ratio - 0.8).abs() < 1e-12);
    }

    #[test]
    fn above_threshold_is_complete() {
        let analysis = analyze(&rows_with_vendor(5, 5));
        assert_eq!(analysis.status("Vendor"), FillStatus::Complete);
        assert_eq!(analysis.status("ITEM"), FillStatus::Complete);
    }

    #[test]
    fn matched_header_without_values_is_missing() {
        let analysis = analyze(&rows_with_vendor(0, 3));
        assert_eq!(analysis.status("Vendor"), FillStatus::Missing);
        assert!(analysis.missing.iter().any(|c| c == "Vendor"));
    }

    #[test]
    fn categories_partition_schema() {
        let analysis = analyze(&rows_with_vendor(2, 5));
        let total = analysis.complete.len() + analysis.partial.len() + analysis.missing.len();
        assert_eq!(total, TARGET_COLUMNS.len());
        assert!(analysis.needs_fill("Vendor"));
        assert!(!analysis.needs_fill("ITEM"));
        assert_eq!(analysis.columns_needing_fill().len(), TARGET_COLUMNS.len() - 1);
    }

    #[test]
    fn zero_is_not_blank() {
        let rows = vec![Record::new().with("Weight", 0.0)];
        assert_eq!(analyze(&rows).status("Weight"), FillStatus::Complete);
    }
}
