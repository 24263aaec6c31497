//! Sheet selection.

use std::path::PathBuf;

use crate::error::{IngestError, Result};
use crate::sheet::{Sheet, TabularFile};

/// Name fragments of likely listing sheets, highest priority first.
pub const SHEET_PRIORITY: [&str; 4] = ["rithum upload", "listings", "listing", "data"];

/// Picks the sheet most likely to hold the listing rows.
///
/// - a single sheet is always chosen;
/// - otherwise the first sheet whose lowercased name contains a
///   [`SHEET_PRIORITY`] fragment, trying fragments in order;
/// - otherwise the non-empty sheet with the most columns, ties keeping the
///   earlier sheet, defaulting to the first sheet.
pub fn detect_best_sheet(file: &TabularFile) -> Result<&Sheet> {
    let first = file.first_sheet().ok_or_else(|| IngestError::NoUsableSheet {
        path: PathBuf::from(&file.name),
    })?;
    if file.sheets.len() == 1 {
        return Ok(first);
    }

    for fragment in SHEET_PRIORITY {
        if let Some(sheet) = file
            .sheets
            .iter()
            .find(|s| s.name.to_lowercase().contains(fragment))
        {
            return Ok(sheet);
        }
    }

    let mut best = first;
    let mut max_columns = 0;
    for sheet in file.sheets.iter().filter(|s| !s.is_empty()) {
        if sheet.column_count() > max_columns {
            max_columns = sheet.column_count();
            best = sheet;
        }
    }
    Ok(best)
}

/// Selects a sheet by name, or the best sheet when no name is given.
///
/// Names match exactly first, then ignoring case and surrounding whitespace.
pub fn select_sheet<'a>(file: &'a TabularFile, requested: Option<&str>) -> Result<&'a Sheet> {
    let Some(requested) = requested else {
        return detect_best_sheet(file);
    };
    let wanted = requested.trim().to_lowercase();
    file.sheet(requested)
        .or_else(|| {
            file.sheets
                .iter()
                .find(|s| s.name.trim().to_lowercase() == wanted)
        })
        .ok_or_else(|| IngestError::SheetNotFound {
            sheet: requested.to_string(),
            available: file.sheets.iter().map(|s| s.name.clone()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use listing_model::CellValue;

    use super::*;
    use crate::format::FileFormat;

    fn sheet(name: &str, columns: usize, rows: usize) -> Sheet {
        let headers = (0..columns).map(|i| format!("C{i}")).collect();
        let values = (0..rows).map(|_| vec![CellValue::text("x"); columns]);
        Sheet::from_rows(name, headers, values)
    }

    fn file(sheets: Vec<Sheet>) -> TabularFile {
        TabularFile {
            name: "upload.xlsx".to_string(),
            format: FileFormat::Workbook,
            sheets,
        }
    }

    #[test]
    fn single_sheet_wins() {
        let f = file(vec![sheet("Notes", 1, 0)]);
        assert_eq!(detect_best_sheet(&f).unwrap().name, "Notes");
    }

    #[test]
    fn priority_fragments_in_order() {
        let f = file(vec![
            sheet("Raw Data", 5, 1),
            sheet("My Listings", 2, 1),
            sheet("Rithum Upload v2", 1, 1),
        ]);
        assert_eq!(detect_best_sheet(&f).unwrap().name, "Rithum Upload v2");

        let f = file(vec![sheet("Raw Data", 5, 1), sheet("Listing", 2, 1)]);
        assert_eq!(detect_best_sheet(&f).unwrap().name, "Listing");
    }

    #[test]
    fn widest_non_empty_sheet_otherwise() {
        let f = file(vec![
            sheet("A", 3, 1),
            sheet("B", 9, 0),
            sheet("C", 5, 2),
            sheet("D", 5, 2),
        ]);
        assert_eq!(detect_best_sheet(&f).unwrap().name, "C");
    }

    #[test]
    fn all_empty_defaults_to_first() {
        let f = file(vec![sheet("A", 3, 0), sheet("B", 9, 0)]);
        assert_eq!(detect_best_sheet(&f).unwrap().name, "A");
    }

    #[test]
    fn no_sheets_is_an_error() {
        let f = file(vec![]);
        assert!(matches!(
            detect_best_sheet(&f),
            Err(IngestError::NoUsableSheet { .. })
        ));
    }

    #[test]
    fn explicit_selection() {
        let f = file(vec![sheet("Sheet1", 1, 1), sheet("Extra", 1, 1)]);
        assert_eq!(select_sheet(&f, Some("extra")).unwrap().name, "Extra");
        assert_eq!(select_sheet(&f, None).unwrap().name, "Sheet1");
        assert!(matches!(
            select_sheet(&f, Some("Missing")),
            Err(IngestError::SheetNotFound { .. })
        ));
    }
}
