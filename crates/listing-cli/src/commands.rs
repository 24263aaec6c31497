use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use listing_ingest::{load_path, select_sheet};
use listing_map::{analyze, relevant_supplemental_fields, unique_items};
use listing_model::{Record, RunConfig};
use listing_output::{analysis_file_name, emit_export};
use listing_transform::{PipelineContext, build_export};

use crate::cli::{GenerateArgs, ScanArgs};
use crate::types::{FieldPrompt, GenerateResult, ScanReport};

pub fn run_scan(args: &ScanArgs) -> Result<ScanReport> {
    let file = load_path(&args.file).with_context(|| format!("load {}", args.file.display()))?;
    let sheet = select_sheet(&file, args.sheet.as_deref()).context("select listing sheet")?;

    let analysis = analyze(&sheet.rows);
    let relevant_fields = relevant_supplemental_fields(&analysis)
        .into_iter()
        .map(FieldPrompt::from)
        .collect();

    Ok(ScanReport {
        file: file.name.clone(),
        sheet: sheet.name.clone(),
        available_sheets: file.sheet_names().into_iter().map(str::to_string).collect(),
        unique_items: unique_items(&sheet.rows),
        analysis,
        relevant_fields,
    })
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let file = load_path(&args.file).with_context(|| format!("load {}", args.file.display()))?;
    let sheet = select_sheet(&file, args.sheet.as_deref()).context("select listing sheet")?;

    let span = info_span!("generate", source = %file.name, sheet = %sheet.name);
    let _guard = span.enter();
    let start = Instant::now();

    let supplemental = args
        .supplemental
        .as_deref()
        .map(load_supplemental)
        .transpose()?;
    let config = build_config(args)?;
    let ctx = PipelineContext::new(file.name.clone()).with_config(config);
    let bundle = build_export(&ctx, &sheet.rows, supplemental.as_deref());

    let output_path = if args.dry_run {
        None
    } else {
        let bytes = emit_export(&bundle).context("build analysis workbook")?;
        let output_dir = output_dir(args);
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        let path = output_dir.join(analysis_file_name(&file.name));
        std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(
        rows = bundle.canonical.len(),
        written = output_path.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );

    Ok(GenerateResult {
        source: file.name.clone(),
        sheet: sheet.name.clone(),
        supplemental_rows: supplemental.as_ref().map(Vec::len),
        sheets: bundle.sheet_summary(),
        provenance: bundle.provenance,
        output_path,
    })
}

/// Rows of the supplemental file's first sheet.
fn load_supplemental(path: &Path) -> Result<Vec<Record>> {
    let file =
        load_path(path).with_context(|| format!("load supplemental {}", path.display()))?;
    Ok(file
        .first_sheet()
        .map(|sheet| sheet.rows.clone())
        .unwrap_or_default())
}

/// Config file values, then command-line overrides.
fn build_config(args: &GenerateArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => {
            RunConfig::load(path).with_context(|| format!("load config {}", path.display()))?
        }
        None => RunConfig::default(),
    };
    for assignment in &args.defaults {
        config
            .apply_assignment(assignment)
            .context("parse --default")?;
    }
    if let Some(code) = &args.harmonized_code {
        config.harmonized_code.clone_from(code);
    }
    if let Some(country) = &args.origin_country {
        config.origin_country.clone_from(country);
    }
    Ok(config)
}

fn output_dir(args: &GenerateArgs) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| {
        args.file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    })
}
