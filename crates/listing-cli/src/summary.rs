use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_map::{FillStatus, MatchedField};
use listing_model::{SUPPLEMENTAL_FIELDS, TARGET_COLUMNS};
use listing_transform::SourceCounts;

use crate::types::{GenerateResult, ScanReport};

/// Unique items listed before the rest are elided.
const ITEM_PREVIEW: usize = 10;

pub fn print_scan(report: &ScanReport) {
    println!("File: {}", report.file);
    println!("Sheet: {}", report.sheet);
    if report.available_sheets.len() > 1 {
        println!("Available sheets: {}", report.available_sheets.join(", "));
    }
    println!(
        "Rows: {}  Unique items: {}",
        report.analysis.total_rows,
        report.unique_items.len()
    );
    print_item_preview(&report.unique_items);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Status"),
        header_cell("Source header"),
        header_cell("Fill"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    let analysis = &report.analysis;
    for field in analysis.complete.iter().chain(&analysis.partial) {
        table.add_row(matched_row(field, analysis.status(&field.column)));
    }
    for column in &analysis.missing {
        table.add_row(vec![
            Cell::new(column),
            status_cell(FillStatus::Missing),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    if !report.relevant_fields.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Default field"),
            header_cell("Kind"),
            header_cell("Hint"),
        ]);
        apply_table_style(&mut table);
        for field in &report.relevant_fields {
            let hint = if field.options.is_empty() {
                field.hint.to_string()
            } else {
                field.options.join(" | ")
            };
            table.add_row(vec![Cell::new(field.name), Cell::new(field.kind), Cell::new(hint)]);
        }
        println!("{table}");
    }
}

pub fn print_generate(result: &GenerateResult) {
    println!("Source: {} (sheet {})", result.source, result.sheet);
    if let Some(rows) = result.supplemental_rows {
        println!("Supplemental rows: {rows}");
    }
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run, nothing written"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Sheet"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &result.sheets {
        let rows = if entry.rows == 0 {
            dim_cell("0 (omitted)")
        } else {
            Cell::new(entry.rows)
        };
        table.add_row(vec![Cell::new(entry.sheet), rows]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Source"),
        header_cell("Supplemental"),
        header_cell("Default"),
        header_cell("Empty"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in result.provenance.columns() {
        if entry.counts.empty < entry.counts.total() {
            table.add_row(counts_row(Cell::new(entry.column), &entry.counts));
        }
    }
    let totals = result.provenance.totals();
    table.add_row(counts_row(
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        &totals,
    ));
    println!("{table}");
}

pub fn print_columns() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Default kind"),
        header_cell("Hint"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in TARGET_COLUMNS.iter().enumerate() {
        let field = SUPPLEMENTAL_FIELDS.iter().find(|f| f.name == *column);
        let (kind, hint) = match field {
            Some(field) => (Cell::new(field.kind.label()), Cell::new(field.hint)),
            None => (dim_cell("-"), dim_cell("")),
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(*column), kind, hint]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn print_item_preview(items: &[String]) {
    if items.is_empty() {
        return;
    }
    let preview: Vec<&str> = items.iter().take(ITEM_PREVIEW).map(String::as_str).collect();
    let more = items.len().saturating_sub(ITEM_PREVIEW);
    if more > 0 {
        println!("Items: {} (+{more} more)", preview.join(", "));
    } else {
        println!("Items: {}", preview.join(", "));
    }
}

fn matched_row(field: &MatchedField, status: FillStatus) -> Vec<Cell> {
    vec![
        Cell::new(&field.column),
        status_cell(status),
        Cell::new(&field.source_header),
        Cell::new(format!("{:.0}%", field.fill_ratio * 100.0)),
    ]
}

fn counts_row(label: Cell, counts: &SourceCounts) -> Vec<Cell> {
    vec![
        label,
        count_cell(counts.source),
        count_cell(counts.supplemental),
        count_cell(counts.global_default),
        count_cell(counts.empty),
    ]
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: FillStatus) -> Cell {
    let color = match status {
        FillStatus::Complete => Color::Green,
        FillStatus::Partial => Color::Yellow,
        FillStatus::Missing => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count)
    }
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
