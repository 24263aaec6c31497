//! Derived sheets fanned out from the canonical rows.
//!
//! `ItemVendor`, `Item` and `Pack` carry one row per distinct item identity
//! in first-occurrence order; `ItemUPC` carries one row per canonical row.
//! Identities compare by their exact text, and rows with a blank identity
//! only reach `ItemUPC`.

use std::collections::HashSet;

use serde::Serialize;

use listing_model::{CanonicalRow, CellValue, ITEM_SHEET_DEFAULTS, Record, columns};

const PACK_TYPE: &str = "Each";
const PACK_QUANTITY: f64 = 1.0;
const LENGTH_UOM: &str = "Inch";
const WEIGHT_UOM: &str = "Pound";
const UPC_SOURCE: &str = "Listings";

/// Values stamped onto every `Item` sheet row from the run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSheetSettings {
    pub harmonized_code: String,
    pub origin_country: String,
}

/// The four derived sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedSheets {
    pub item_vendor: Vec<Record>,
    pub item: Vec<Record>,
    pub pack: Vec<Record>,
    pub item_upc: Vec<Record>,
}

impl DerivedSheets {
    /// Derives every sheet from the canonical rows.
    pub fn build(rows: &[CanonicalRow], settings: &ItemSheetSettings) -> Self {
        let distinct = distinct_items(rows);
        Self {
            item_vendor: distinct.iter().map(|row| item_vendor_row(row)).collect(),
            item: distinct.iter().map(|row| item_row(row, settings)).collect(),
            pack: distinct.iter().map(|row| pack_row(row)).collect(),
            item_upc: rows.iter().map(item_upc_row).collect(),
        }
    }
}

/// The first canonical row of each distinct, non-blank item identity.
pub fn distinct_items(rows: &[CanonicalRow]) -> Vec<&CanonicalRow> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| !row.item().is_blank())
        .filter(|row| seen.insert(row.item().to_text()))
        .collect()
}

/// Builds the `ItemVendor` sheet.
pub fn build_item_vendor_sheet(rows: &[CanonicalRow]) -> Vec<Record> {
    distinct_items(rows).into_iter().map(item_vendor_row).collect()
}

/// Builds the `Item` master sheet.
pub fn build_item_sheet(rows: &[CanonicalRow], settings: &ItemSheetSettings) -> Vec<Record> {
    distinct_items(rows)
        .into_iter()
        .map(|row| item_row(row, settings))
        .collect()
}

/// Builds the `Pack` sheet.
pub fn build_pack_sheet(rows: &[CanonicalRow]) -> Vec<Record> {
    distinct_items(rows).into_iter().map(pack_row).collect()
}

/// Builds the `ItemUPC` sheet.
pub fn build_item_upc_sheet(rows: &[CanonicalRow]) -> Vec<Record> {
    rows.iter().map(item_upc_row).collect()
}

fn item_vendor_row(row: &CanonicalRow) -> Record {
    let item = row.item().clone();
    Record::with_capacity(7)
        .with("Fulfillment Type", "")
        .with("Item", item.clone())
        .with("Trading Partner", row.value(columns::VENDOR))
        .with("SKU/UPC", item)
        .with("Unit Cost", row.value(columns::UNIT_COST))
        .with("Is Preferred Vendor", true)
        .with("Quantity", "")
}

fn item_row(row: &CanonicalRow, settings: &ItemSheetSettings) -> Record {
    let item = row.item().clone();
    let mut record = Record::with_capacity(21)
        .with("ID", "")
        .with("Number", item.clone())
        .with("Name", item)
        .with("Long Description", row.value(columns::EBAY_TITLE))
        .with("Unit Cost", row.value(columns::UNIT_COST));
    for (column, value) in ITEM_SHEET_DEFAULTS {
        record.insert(column, value);
    }
    record
        .with("Trading Partner", row.value(columns::VENDOR))
        .with("Retail Price", row.value(columns::BIN))
        .with("Product Category", product_category(row))
        .with("Harmonized Code", settings.harmonized_code.as_str())
        .with("Short Description", "")
        .with("Origin Country", settings.origin_country.as_str())
}

fn product_category(row: &CanonicalRow) -> CellValue {
    let product_type = row.value(columns::PRODUCT_TYPE);
    if product_type.is_falsy() {
        row.value(columns::DEPOSCO_CATEGORY)
    } else {
        product_type
    }
}

fn pack_row(row: &CanonicalRow) -> Record {
    let item = row.item().clone();
    Record::with_capacity(14)
        .with("Pack Key", format!("{}--{PACK_TYPE}--1", item.to_text()))
        .with("Item", item)
        .with("Pack Type", PACK_TYPE)
        .with("Quantity", PACK_QUANTITY)
        .with("Length", row.value(columns::LENGTH))
        .with("Length Uom", LENGTH_UOM)
        .with("Width", row.value(columns::WIDTH))
        .with("Width Uom", LENGTH_UOM)
        .with("Height", row.value(columns::HEIGHT))
        .with("Height Uom", LENGTH_UOM)
        .with("Volume", "")
        .with("Volume Uom", "")
        .with("Weight", row.value(columns::WEIGHT))
        .with("Weight Uom", WEIGHT_UOM)
}

fn item_upc_row(row: &CanonicalRow) -> Record {
    Record::with_capacity(3)
        .with("ITEM", row.item().clone())
        .with("UPC", row.value(columns::LISTING_SKU))
        .with("Source", UPC_SOURCE)
}
