//! Column-ordered tables ready to be written as worksheets.

use listing_model::{CanonicalRow, CellValue, Record, TARGET_COLUMNS, sheets};
use listing_transform::ExportBundle;

/// One worksheet's worth of data: a header row plus value rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table whose columns follow the first record's header order.
    ///
    /// Headers missing from later records are written as empty cells.
    pub fn from_records(name: impl Into<String>, records: &[Record]) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|record| record.headers().map(str::to_string).collect())
            .unwrap_or_default();
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Builds the canonical sheet in target schema order.
    pub fn from_canonical(name: impl Into<String>, rows: &[CanonicalRow]) -> Self {
        Self {
            name: name.into(),
            columns: TARGET_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            rows: rows.iter().map(|row| row.values().to_vec()).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lays out an export bundle as worksheets in workbook order.
///
/// Sheets without rows are dropped, except that the canonical sheet is kept
/// (header only) when it would otherwise leave the workbook with no sheets.
pub fn export_tables(bundle: &ExportBundle) -> Vec<SheetTable> {
    let derived = &bundle.derived;
    let tables: Vec<SheetTable> = [
        SheetTable::from_canonical(sheets::RITHUM_UPLOAD, &bundle.canonical),
        SheetTable::from_records(sheets::ITEM_VENDOR, &derived.item_vendor),
        SheetTable::from_records(sheets::ITEM, &derived.item),
        SheetTable::from_records(sheets::PACK, &derived.pack),
        SheetTable::from_records(sheets::ITEM_UPC, &derived.item_upc),
    ]
    .into_iter()
    .filter(|table| !table.is_empty())
    .collect();

    if tables.is_empty() {
        vec![SheetTable::from_canonical(sheets::RITHUM_UPLOAD, &[])]
    } else {
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_columns_follow_first_row() {
        let records = vec![
            Record::new().with("Item", "A1").with("UPC", "0001"),
            Record::new().with("UPC", "0002"),
        ];
        let table = SheetTable::from_records("ItemUPC", &records);
        assert_eq!(table.columns, vec!["Item", "UPC"]);
        assert_eq!(
            table.rows[1],
            vec![CellValue::Empty, CellValue::text("0002")]
        );
    }

    #[test]
    fn canonical_table_has_schema_columns() {
        let mut row = CanonicalRow::empty();
        row.set("ITEM", "A1");
        let table = SheetTable::from_canonical("Rithum Upload", &[row]);
        assert_eq!(table.column_count(), 42);
        assert_eq!(table.rows[0][0], CellValue::text("A1"));
    }

    #[test]
    fn empty_records_give_empty_table() {
        let table = SheetTable::from_records("Pack", &[]);
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }
}
