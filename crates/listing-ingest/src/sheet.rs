//! Loaded sheets and files.

use std::collections::HashSet;

use listing_model::{CellValue, Record};

use crate::format::FileFormat;

/// One sheet of a loaded file: headers plus rows keyed by those headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Sheet {
    /// Builds a sheet from raw header text and positional row values.
    ///
    /// Blank headers become `Unnamed: <index>` and repeated headers are
    /// suffixed `.1`, `.2`, ... Rows with no value in any column are
    /// skipped; short rows are padded with empty cells.
    pub fn from_rows<I>(name: impl Into<String>, raw_headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let headers = dedupe_headers(raw_headers);
        let rows = rows
            .into_iter()
            .filter(|values| values.iter().any(|v| *v != CellValue::Empty))
            .map(|mut values| {
                values.resize(headers.len(), CellValue::Empty);
                headers.iter().cloned().zip(values).collect::<Record>()
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A loaded input file with its sheets in workbook order.
///
/// CSV files load as a single sheet named after the file stem.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularFile {
    pub name: String,
    pub format: FileFormat,
    pub sheets: Vec<Sheet>,
}

impl TabularFile {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Returns the sheet with exactly this name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }
}

/// Fills blank headers and disambiguates repeated ones.
pub(crate) fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());
    for (idx, header) in raw.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn dedupes_and_names_blank_headers() {
        let headers = dedupe_headers(strings(&["Item", "", "Item", "Item", " "]));
        assert_eq!(
            headers,
            vec!["Item", "Unnamed: 1", "Item.1", "Item.2", "Unnamed: 4"]
        );
    }

    #[test]
    fn skips_empty_rows_and_pads_short_rows() {
        let sheet = Sheet::from_rows(
            "Data",
            strings(&["Item", "Vendor"]),
            vec![
                vec![CellValue::text("A1")],
                vec![CellValue::Empty, CellValue::Empty],
                vec![CellValue::text("A2"), CellValue::text("Acme")],
            ],
        );
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 2);
        assert_eq!(sheet.rows[0].get("Vendor"), Some(&CellValue::Empty));
        assert_eq!(sheet.rows[1].get("Vendor"), Some(&CellValue::text("Acme")));
    }
}
