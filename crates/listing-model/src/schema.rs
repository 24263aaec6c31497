//! Target schema registry.
//!
//! The analysis workbook has a fixed 42-column layout. Column order here is
//! the order columns are written to the `Rithum Upload` sheet.

use crate::value::CellValue;

/// Number of target columns in the analysis schema.
pub const TARGET_COLUMN_COUNT: usize = 42;

/// Ordered target columns of the canonical (`Rithum Upload`) sheet.
pub const TARGET_COLUMNS: [&str; TARGET_COLUMN_COUNT] = [
    "ITEM",
    "Listing SKU",
    "Blocked",
    "Blocked Notes",
    "Brand",
    "Product Type",
    "Deposco Category",
    "Amazon Title",
    "eBay Title",
    "Amazon Trademark Brand List",
    "Amazon Category",
    "Store Category",
    "Store Featured Category",
    "Keywords",
    "Amazon Description",
    "Applications",
    "Replaces",
    "Fitment",
    "Store Fitment",
    "Division Listing Type",
    "Length",
    "Width",
    "Height",
    "Weight",
    "Images",
    "Unit Cost",
    "BIN",
    "Vendor",
    "Source",
    "Partslink Numbers",
    "Manufacturer Part Number",
    "Interchange Part Number",
    "Other Part Number",
    "OEM Interchange Part Number 1",
    "OEM Interchange Part Number 2",
    "OEM Interchange Part Number 3",
    "OEM Interchange Part Number 4",
    "OEM Interchange Part Number 5",
    "OEM Interchange Part Number 6",
    "OEM Interchange Part Number 7",
    "OEM Interchange Part Number 8",
    "OEM Interchange Part Number 9",
];

/// Well-known target columns referenced by name elsewhere in the pipeline.
pub mod columns {
    pub const ITEM: &str = "ITEM";
    pub const LISTING_SKU: &str = "Listing SKU";
    pub const BLOCKED: &str = "Blocked";
    pub const PRODUCT_TYPE: &str = "Product Type";
    pub const DEPOSCO_CATEGORY: &str = "Deposco Category";
    pub const EBAY_TITLE: &str = "eBay Title";
    pub const LENGTH: &str = "Length";
    pub const WIDTH: &str = "Width";
    pub const HEIGHT: &str = "Height";
    pub const WEIGHT: &str = "Weight";
    pub const UNIT_COST: &str = "Unit Cost";
    pub const BIN: &str = "BIN";
    pub const VENDOR: &str = "Vendor";
}

/// Output sheet names, in workbook order.
pub mod sheets {
    pub const RITHUM_UPLOAD: &str = "Rithum Upload";
    pub const ITEM_VENDOR: &str = "ItemVendor";
    pub const ITEM: &str = "Item";
    pub const PACK: &str = "Pack";
    pub const ITEM_UPC: &str = "ItemUPC";
}

/// Headers checked, in order and under any casing, for a supplemental row's
/// lookup key.
pub const SUPPLEMENTAL_KEY_HEADERS: [&str; 3] = ["ITEM", "SKU", "Listing SKU"];

/// Operational defaults stamped onto every row of the `Item` sheet.
pub const ITEM_SHEET_DEFAULTS: [(&str, CellValue); 10] = [
    ("Drop Ship", CellValue::Number(1.0)),
    ("Reorder Lead Time", CellValue::Number(0.0)),
    ("Minimum Order Quantity", CellValue::Number(0.0)),
    ("Reorder Point", CellValue::Number(0.0)),
    ("Reorder Quantity", CellValue::Number(0.0)),
    ("Inventory Tracking Enabled", CellValue::Bool(true)),
    ("Shippable Flag", CellValue::Bool(true)),
    ("FL Reorder Point", CellValue::Number(0.0)),
    ("FL Reorder Quantity", CellValue::Number(0.0)),
    ("Default Receive Quantity", CellValue::Number(1.0)),
];

/// Input kind of a supplemental field, used when prompting for defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Numeric amount or measurement.
    Number,
    /// One of a fixed set of options.
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select(_) => "select",
        }
    }
}

/// A target column that can be filled from a global default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplementalField {
    /// Target column name.
    pub name: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Placeholder hint (empty when none).
    pub hint: &'static str,
}

impl SupplementalField {
    const fn new(name: &'static str, kind: FieldKind, hint: &'static str) -> Self {
        Self { name, kind, hint }
    }
}

/// Target columns that may be filled from global defaults, with input hints.
pub const SUPPLEMENTAL_FIELDS: [SupplementalField; 18] = [
    SupplementalField::new("Brand", FieldKind::Text, "e.g. Rareelectrical"),
    SupplementalField::new("Product Type", FieldKind::Text, "e.g. Turbocharger"),
    SupplementalField::new("Deposco Category", FieldKind::Text, "e.g. Turbocharger"),
    SupplementalField::new(
        "Amazon Trademark Brand List",
        FieldKind::Text,
        "e.g. CUMMINS,MAXIFORCE",
    ),
    SupplementalField::new("Amazon Category", FieldKind::Text, "e.g. Automotive"),
    SupplementalField::new("Store Category", FieldKind::Text, "e.g. Turbochargers"),
    SupplementalField::new("Store Featured Category", FieldKind::Text, ""),
    SupplementalField::new(
        "Division Listing Type",
        FieldKind::Select(&["", "Primary", "Secondary"]),
        "",
    ),
    SupplementalField::new("Length", FieldKind::Number, "inches"),
    SupplementalField::new("Width", FieldKind::Number, "inches"),
    SupplementalField::new("Height", FieldKind::Number, "inches"),
    SupplementalField::new("Weight", FieldKind::Number, "lbs"),
    SupplementalField::new("Images", FieldKind::Text, "Image URLs"),
    SupplementalField::new("Unit Cost", FieldKind::Number, "$ amount"),
    SupplementalField::new("BIN", FieldKind::Number, "Retail Price $"),
    SupplementalField::new("Vendor", FieldKind::Text, "e.g. Maxiforce"),
    SupplementalField::new("Source", FieldKind::Text, "e.g. Aftermarket"),
    SupplementalField::new("Partslink Numbers", FieldKind::Text, ""),
];

/// Returns the position of `column` in [`TARGET_COLUMNS`] (exact match).
pub fn column_index(column: &str) -> Option<usize> {
    TARGET_COLUMNS.iter().position(|name| *name == column)
}

/// Returns true if `column` is a target column (exact match).
pub fn is_target_column(column: &str) -> bool {
    column_index(column).is_some()
}
