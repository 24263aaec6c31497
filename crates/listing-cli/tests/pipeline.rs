//! Integration tests for the scan and generate commands.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use listing_cli::cli::{GenerateArgs, ScanArgs};
use listing_cli::commands::{run_generate, run_scan};
use listing_map::FillStatus;

const LISTINGS: &str = "\u{feff}Item,Listing SKU,Vendor,Weight\n\
                        A1,0001,Acme,4.5\n\
                        A1,0002,Acme,\n\
                        B2,0003,,\n";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn generate_args(file: PathBuf, output_dir: &Path) -> GenerateArgs {
    GenerateArgs {
        file,
        sheet: None,
        supplemental: None,
        config: None,
        defaults: Vec::new(),
        harmonized_code: None,
        origin_country: None,
        output_dir: Some(output_dir.to_path_buf()),
        dry_run: false,
    }
}

fn text(data: &Data) -> String {
    match data {
        Data::String(value) => value.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[test]
fn scan_reports_coverage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_file(dir.path(), "listings.csv", LISTINGS);

    let report = run_scan(&ScanArgs {
        file,
        sheet: None,
        json: false,
    })
    .expect("scan");

    assert_eq!(report.sheet, "listings");
    assert_eq!(report.analysis.total_rows, 3);
    assert_eq!(report.unique_items, vec!["A1", "B2"]);
    assert_eq!(report.analysis.status("ITEM"), FillStatus::Complete);
    assert_eq!(report.analysis.status("Vendor"), FillStatus::Partial);
    assert_eq!(report.analysis.status("Brand"), FillStatus::Missing);
    assert!(report.relevant_fields.iter().any(|f| f.name == "Brand"));
    assert!(!report.relevant_fields.iter().any(|f| f.name == "Listing SKU"));

    let json = serde_json::to_value(&report).expect("report json");
    assert_eq!(json["analysis"]["total_rows"], 3);
}

#[test]
fn generate_writes_analysis_workbook() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_file(dir.path(), "listings.csv", LISTINGS);
    let supplemental = write_file(dir.path(), "extra.csv", "SKU,Weight,Brand\nb2,7,Maxiforce\n");
    let out = dir.path().join("out");

    let mut args = generate_args(file, &out);
    args.supplemental = Some(supplemental);
    args.defaults = vec!["Vendor=Fallback".to_string()];
    args.origin_country = Some("CN".to_string());

    let result = run_generate(&args).expect("generate");
    let output = result.output_path.expect("output path");
    assert_eq!(output, out.join("listings_ANALYSIS.xlsx"));
    assert_eq!(result.supplemental_rows, Some(1));

    let mut workbook = open_workbook_auto(&output).expect("open output");
    assert_eq!(
        workbook.sheet_names(),
        vec!["Rithum Upload", "ItemVendor", "Item", "Pack", "ItemUPC"]
    );

    let canonical = workbook.worksheet_range("Rithum Upload").expect("canonical");
    let header: Vec<String> = canonical
        .rows()
        .next()
        .expect("header")
        .iter()
        .map(text)
        .collect();
    let col = |name: &str| header.iter().position(|h| h == name).expect("column");

    // Leading zeros survive because CSV cells are read as text.
    assert_eq!(text(&canonical[(1, col("Listing SKU"))]), "0001");
    assert_eq!(text(&canonical[(3, col("Weight"))]), "7");
    assert_eq!(text(&canonical[(3, col("Brand"))]), "Maxiforce");
    assert_eq!(text(&canonical[(3, col("Vendor"))]), "Fallback");
    assert_eq!(text(&canonical[(1, col("Vendor"))]), "Acme");

    let item = workbook.worksheet_range("Item").expect("item sheet");
    assert_eq!(item.get_size().0, 3);
    let origin = item
        .rows()
        .next()
        .expect("item header")
        .iter()
        .position(|h| text(h) == "Origin Country")
        .expect("origin column");
    assert_eq!(text(&item[(1, origin)]), "CN");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_file(dir.path(), "listings.csv", LISTINGS);
    let out = dir.path().join("out");

    let mut args = generate_args(file, &out);
    args.dry_run = true;

    let result = run_generate(&args).expect("generate");
    assert!(result.output_path.is_none());
    assert!(!out.exists());
    let rows: Vec<usize> = result.sheets.iter().map(|s| s.rows).collect();
    assert_eq!(rows, vec![3, 2, 2, 2, 3]);
}

#[test]
fn unreadable_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_file(dir.path(), "broken.xlsx", "not a workbook");
    let out = dir.path().join("out");

    let err = run_generate(&generate_args(file, &out)).unwrap_err();
    assert!(format!("{err:#}").contains("broken.xlsx"));
}
