//! Integration tests for reconciliation and derived sheets.

use std::collections::HashSet;

use listing_model::{CellValue, Record, RunConfig, TARGET_COLUMNS};
use listing_transform::{
    DerivedSheets, GlobalDefaults, ItemSheetSettings, PipelineContext, SupplementalTable,
    ValueSource, build_export, build_pack_sheet, reconcile, reconcile_with_provenance,
};
use proptest::prelude::*;

#[test]
fn fills_from_defaults_and_leaves_the_rest_empty() {
    let source = [Record::new().with("Item", "A1").with("Vendor", "Acme")];
    let defaults = GlobalDefaults::from_pairs([("Unit Cost", "12.50")]);
    let rows = reconcile(&source, None, &defaults);

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.get("ITEM"), Some(&CellValue::text("A1")));
    assert_eq!(row.get("Vendor"), Some(&CellValue::text("Acme")));
    assert_eq!(row.get("Unit Cost"), Some(&CellValue::text("12.50")));
    assert_eq!(row.get("Blocked"), Some(&CellValue::Bool(false)));
    for (column, value) in row.iter() {
        if !matches!(column, "ITEM" | "Vendor" | "Unit Cost" | "Blocked") {
            assert_eq!(value, &CellValue::empty_text(), "{column}");
        }
    }
}

#[test]
fn shared_item_yields_one_pack_row() {
    let source = [
        Record::new().with("ITEM", "A1").with("Listing SKU", "0001"),
        Record::new().with("ITEM", "A1").with("Listing SKU", "0002"),
    ];
    let rows = reconcile(&source, None, &GlobalDefaults::new());
    let pack = build_pack_sheet(&rows);
    assert_eq!(pack.len(), 1);
    assert_eq!(pack[0].get("Pack Key"), Some(&CellValue::text("A1--Each--1")));
}

#[test]
fn supplemental_fills_missing_weight() {
    let source = [Record::new().with("Item", "A1").with("Weight", "")];
    let table =
        SupplementalTable::from_records(&[Record::new().with("SKU", "a1").with("Weight", 4.2)]);
    let result = reconcile_with_provenance(&source, Some(&table), &GlobalDefaults::new());

    assert_eq!(result.rows[0].get("Weight"), Some(&CellValue::Number(4.2)));
    let weight = result.provenance.column("Weight").expect("weight counts");
    assert_eq!(weight.supplemental, 1);
    assert_eq!(ValueSource::Supplemental.as_str(), "supplemental");
}

#[test]
fn rows_keep_their_own_header_casing() {
    let source = [
        Record::new().with("ITEM", "A1").with("VENDOR", "X"),
        Record::new().with("Item", "B2").with("Vendor", "Acme"),
        Record::new().with("item", "C3"),
    ];
    let table = SupplementalTable::from_records(&[
        Record::new().with("SKU", "A1").with("Brand", "First"),
        Record::new().with("ITEM", "c3").with("weight", 4.2),
    ]);
    let result = reconcile_with_provenance(&source, Some(&table), &GlobalDefaults::new());
    let rows = &result.rows;

    assert_eq!(rows[1].get("ITEM"), Some(&CellValue::text("B2")));
    assert_eq!(rows[1].get("Vendor"), Some(&CellValue::text("Acme")));
    assert_eq!(rows[2].get("ITEM"), Some(&CellValue::text("C3")));
    assert_eq!(rows[2].get("Weight"), Some(&CellValue::Number(4.2)));
    assert_eq!(rows[0].get("Brand"), Some(&CellValue::text("First")));

    let vendor = result.provenance.column("Vendor").expect("vendor counts");
    assert_eq!(vendor.source, 2);
    assert_eq!(vendor.empty, 1);
}

#[test]
fn missing_supplemental_degrades_to_defaults() {
    let source = [Record::new().with("Item", "A1")];
    let empty = SupplementalTable::from_records(&[]);
    let defaults = GlobalDefaults::from_pairs([("Brand", "Rareelectrical")]);
    let rows = reconcile(&source, Some(&empty), &defaults);
    assert_eq!(rows[0].get("Brand"), Some(&CellValue::text("Rareelectrical")));
}

#[test]
fn export_bundle_summary() {
    let config = RunConfig::new()
        .with_default("vendor", "Maxiforce")
        .with_origin_country("US");
    let ctx = PipelineContext::new("listings.xlsx").with_config(config);
    let source = vec![
        Record::new().with("Item", "A1"),
        Record::new().with("Item", "B2"),
        Record::new().with("Item", "A1"),
        Record::new().with("Item", ""),
    ];
    let bundle = build_export(&ctx, &source, None);

    let counts: Vec<(&str, usize)> = bundle
        .sheet_summary()
        .iter()
        .map(|entry| (entry.sheet, entry.rows))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Rithum Upload", 4),
            ("ItemVendor", 2),
            ("Item", 2),
            ("Pack", 2),
            ("ItemUPC", 4),
        ]
    );
    assert_eq!(
        bundle.derived.item[0].get("Origin Country"),
        Some(&CellValue::text("US"))
    );
    assert_eq!(
        bundle.derived.item_vendor[1].get("Trading Partner"),
        Some(&CellValue::text("Maxiforce"))
    );
}

#[test]
fn item_vendor_and_upc_shapes() {
    let source = [
        Record::new()
            .with("ITEM", "A1")
            .with("Listing SKU", "0001")
            .with("Vendor", "Acme")
            .with("Unit Cost", "12.50"),
        Record::new().with("ITEM", "A1").with("Listing SKU", "0002"),
    ];
    let rows = reconcile(&source, None, &GlobalDefaults::new());
    let sheets = DerivedSheets::build(&rows, &ItemSheetSettings::default());

    insta::assert_json_snapshot!(sheets.item_vendor, @r#"
    [
      {
        "Fulfillment Type": "",
        "Item": "A1",
        "Trading Partner": "Acme",
        "SKU/UPC": "A1",
        "Unit Cost": "12.50",
        "Is Preferred Vendor": true,
        "Quantity": ""
      }
    ]
    "#);
    insta::assert_json_snapshot!(sheets.item_upc, @r#"
    [
      {
        "ITEM": "A1",
        "UPC": "0001",
        "Source": "Listings"
      },
      {
        "ITEM": "A1",
        "UPC": "0002",
        "Source": "Listings"
      }
    ]
    "#);
}

fn header_variant(column: &str, pattern: u8) -> String {
    match pattern % 4 {
        0 => column.to_uppercase(),
        1 => column.to_lowercase(),
        2 => format!("  {column}"),
        _ => format!("{column} "),
    }
}

fn source_rows() -> impl Strategy<Value = Vec<Record>> {
    let row = (
        prop::option::of("[A-C][0-9]"),
        prop::option::of("[a-z ]{0,6}"),
        0usize..TARGET_COLUMNS.len(),
        0u8..4,
    )
        .prop_map(|(item, value, column_idx, pattern)| {
            let mut record = Record::new();
            if let Some(item) = item {
                record.insert("Item", item);
            }
            if let Some(value) = value {
                record.insert(header_variant(TARGET_COLUMNS[column_idx], pattern), value);
            }
            record
        });
    prop::collection::vec(row, 0..12)
}

proptest! {
    #[test]
    fn one_canonical_row_per_source_row(rows in source_rows()) {
        let canonical = reconcile(&rows, None, &GlobalDefaults::new());
        prop_assert_eq!(canonical.len(), rows.len());
        for row in &canonical {
            prop_assert_eq!(row.values().len(), TARGET_COLUMNS.len());
            let blocked = row.get("Blocked").expect("blocked column");
            prop_assert!(row.is_unblocked() || !blocked.is_falsy());
        }
    }

    #[test]
    fn reconcile_is_deterministic(rows in source_rows()) {
        let defaults = GlobalDefaults::from_pairs([("Vendor", "Acme"), ("Weight", "1")]);
        let first = reconcile(&rows, None, &defaults);
        let second = reconcile(&rows, None, &defaults);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn present_source_values_win(value in "[a-z]{1,8}", column_idx in 3usize..42, pattern in 0u8..4) {
        let column = TARGET_COLUMNS[column_idx];
        // An earlier row spells both headers differently.
        let source = [
            Record::new()
                .with("ITEM", "Z9")
                .with(header_variant(column, pattern.wrapping_add(1)), "earlier"),
            Record::new()
                .with("Item", "A1")
                .with(header_variant(column, pattern), value.as_str()),
        ];
        let table = SupplementalTable::from_records(&[Record::new()
            .with("ITEM", "A1")
            .with(column, "from-supplemental")]);
        let defaults = GlobalDefaults::from_pairs([(column, "from-default")]);
        let rows = reconcile(&source, Some(&table), &defaults);
        prop_assert_eq!(rows[0].get(column), Some(&CellValue::text("earlier")));
        prop_assert_eq!(rows[1].get(column), Some(&CellValue::text(value.as_str())));
        prop_assert_eq!(rows[1].get("ITEM"), Some(&CellValue::text("A1")));
    }

    #[test]
    fn derived_sheets_hold_each_identity_once(rows in source_rows()) {
        let canonical = reconcile(&rows, None, &GlobalDefaults::new());
        let sheets = DerivedSheets::build(&canonical, &ItemSheetSettings::default());

        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        for row in &canonical {
            let item = row.item().to_text();
            if !item.trim().is_empty() && seen.insert(item.clone()) {
                expected.push(item);
            }
        }

        for (sheet, key) in [
            (&sheets.item_vendor, "Item"),
            (&sheets.item, "Number"),
            (&sheets.pack, "Item"),
        ] {
            let items: Vec<String> = sheet
                .iter()
                .map(|record| record.get(key).map(CellValue::to_text).unwrap_or_default())
                .collect();
            prop_assert_eq!(&items, &expected);
        }
        prop_assert_eq!(sheets.item_upc.len(), canonical.len());
    }
}
