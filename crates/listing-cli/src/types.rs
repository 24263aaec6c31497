use std::path::PathBuf;

use serde::Serialize;

use listing_map::FieldAnalysis;
use listing_model::{FieldKind, SupplementalField};
use listing_transform::{FillProvenance, SheetCount};

/// Result of scanning one listing file.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub file: String,
    pub sheet: String,
    pub available_sheets: Vec<String>,
    pub unique_items: Vec<String>,
    pub analysis: FieldAnalysis,
    pub relevant_fields: Vec<FieldPrompt>,
}

/// A field that still accepts a global default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPrompt {
    pub name: &'static str,
    pub kind: &'static str,
    pub hint: &'static str,
    pub options: &'static [&'static str],
}

impl From<SupplementalField> for FieldPrompt {
    fn from(field: SupplementalField) -> Self {
        let options = match field.kind {
            FieldKind::Select(options) => options,
            FieldKind::Text | FieldKind::Number => &[],
        };
        Self {
            name: field.name,
            kind: field.kind.label(),
            hint: field.hint,
            options,
        }
    }
}

/// Result of generating one analysis workbook.
#[derive(Debug)]
pub struct GenerateResult {
    pub source: String,
    pub sheet: String,
    pub supplemental_rows: Option<usize>,
    pub output_path: Option<PathBuf>,
    pub sheets: Vec<SheetCount>,
    pub provenance: FillProvenance,
}
