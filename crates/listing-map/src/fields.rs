//! Supplemental fields worth prompting for.

use listing_model::{SUPPLEMENTAL_FIELDS, SupplementalField};

use crate::analyzer::FieldAnalysis;

/// Returns the supplemental fields whose target column is missing or partial.
///
/// Fields keep their definition order. An empty result means every
/// supplemental column is already well covered by the source.
pub fn relevant_supplemental_fields(analysis: &FieldAnalysis) -> Vec<SupplementalField> {
    SUPPLEMENTAL_FIELDS
        .into_iter()
        .filter(|field| analysis.needs_fill(field.name))
        .collect()
}
