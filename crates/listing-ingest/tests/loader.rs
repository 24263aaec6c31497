//! Integration tests for loading listing files from disk.

use std::io::Write;

use listing_ingest::{FileFormat, IngestError, load_bytes, load_path, select_sheet};
use listing_model::CellValue;
use rust_xlsxwriter::Workbook;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

fn listing_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").expect("name notes");
    notes.write_string(0, 0, "Comment").expect("write");
    notes.write_string(1, 0, "ignore me").expect("write");

    let listings = workbook.add_worksheet();
    listings.set_name("Listings").expect("name listings");
    for (col, header) in ["Item", "Vendor", "", "Vendor"].iter().enumerate() {
        let col = u16::try_from(col).expect("column index");
        if !header.is_empty() {
            listings.write_string(0, col, *header).expect("write header");
        }
    }
    listings.write_string(1, 0, "A1").expect("write");
    listings.write_string(1, 1, "Acme").expect("write");
    listings.write_number(1, 2, 4.2).expect("write");
    listings.write_boolean(1, 3, true).expect("write");
    listings.write_string(3, 0, "A2").expect("write");

    workbook.save_to_buffer().expect("save workbook")
}

#[test]
fn loads_csv_from_disk() {
    let file = temp_file(".csv", b"ITEM,Listing SKU,Weight\nA1,00042,4.2\n,,\nA2,00043,\n");
    let loaded = load_path(file.path()).expect("load csv");

    assert_eq!(loaded.format, FileFormat::Csv);
    assert_eq!(loaded.sheets.len(), 1);
    let sheet = &loaded.sheets[0];
    assert_eq!(sheet.headers, vec!["ITEM", "Listing SKU", "Weight"]);
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.rows[0].get("Listing SKU"), Some(&CellValue::text("00042")));
    assert_eq!(sheet.rows[0].get("Weight"), Some(&CellValue::text("4.2")));
}

#[test]
fn loads_workbook_sheets_in_order() {
    let loaded = load_bytes("listings.xlsx", listing_workbook()).expect("load workbook");

    assert_eq!(loaded.format, FileFormat::Workbook);
    assert_eq!(loaded.sheet_names(), vec!["Notes", "Listings"]);

    let sheet = select_sheet(&loaded, None).expect("best sheet");
    assert_eq!(sheet.name, "Listings");
    assert_eq!(sheet.headers, vec!["Item", "Vendor", "Unnamed: 2", "Vendor.1"]);
    assert_eq!(sheet.row_count(), 2);

    let first = &sheet.rows[0];
    assert_eq!(first.get("Item"), Some(&CellValue::text("A1")));
    assert_eq!(first.get("Unnamed: 2"), Some(&CellValue::Number(4.2)));
    assert_eq!(first.get("Vendor.1"), Some(&CellValue::Bool(true)));
    assert_eq!(sheet.rows[1].get("Vendor"), Some(&CellValue::Empty));
}

#[test]
fn explicit_sheet_request() {
    let loaded = load_bytes("listings.xlsx", listing_workbook()).expect("load workbook");
    let sheet = select_sheet(&loaded, Some("notes")).expect("notes sheet");
    assert_eq!(sheet.rows.len(), 1);
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_path(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.is_unreadable());
}

#[test]
fn empty_file_is_unreadable() {
    let file = temp_file(".xlsx", b"");
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyInput { .. }));
}

#[test]
fn corrupt_workbook_is_unreadable() {
    let err = load_bytes("broken.xlsx", b"PK\x03\x04garbage".to_vec()).unwrap_err();
    assert!(matches!(err, IngestError::WorkbookParse { .. }));
    assert!(err.is_unreadable());
}
