//! End-to-end export assembly.
//!
//! ```ignore
//! use listing_transform::{PipelineContext, build_export};
//!
//! let ctx = PipelineContext::new("listings.xlsx").with_config(config);
//! let bundle = build_export(&ctx, &sheet.rows, supplemental_rows.as_deref());
//! for entry in bundle.sheet_summary() {
//!     println!("{}: {}", entry.sheet, entry.rows);
//! }
//! ```

use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use listing_model::{CanonicalRow, Record, sheets};

use crate::context::PipelineContext;
use crate::derived::DerivedSheets;
use crate::reconcile::{FillProvenance, reconcile_with_provenance};
use crate::supplemental::SupplementalTable;

/// Everything needed to write the analysis workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    pub source_name: String,
    pub canonical: Vec<CanonicalRow>,
    pub derived: DerivedSheets,
    pub provenance: FillProvenance,
}

/// Row count of one output sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetCount {
    pub sheet: &'static str,
    pub rows: usize,
}

impl ExportBundle {
    /// Row counts per output sheet, in workbook order.
    pub fn sheet_summary(&self) -> Vec<SheetCount> {
        vec![
            SheetCount {
                sheet: sheets::RITHUM_UPLOAD,
                rows: self.canonical.len(),
            },
            SheetCount {
                sheet: sheets::ITEM_VENDOR,
                rows: self.derived.item_vendor.len(),
            },
            SheetCount {
                sheet: sheets::ITEM,
                rows: self.derived.item.len(),
            },
            SheetCount {
                sheet: sheets::PACK,
                rows: self.derived.pack.len(),
            },
            SheetCount {
                sheet: sheets::ITEM_UPC,
                rows: self.derived.item_upc.len(),
            },
        ]
    }
}

/// Reconciles the source rows and derives every output sheet.
///
/// `supplemental` holds the rows of the supplemental file's first sheet.
/// Neither stage can fail.
pub fn build_export(
    ctx: &PipelineContext,
    source: &[Record],
    supplemental: Option<&[Record]>,
) -> ExportBundle {
    let span = info_span!("export", source = %ctx.source_name);
    let _guard = span.enter();
    let start = Instant::now();

    let table = supplemental.map(SupplementalTable::from_records);
    let defaults = ctx.global_defaults();
    let reconciliation = reconcile_with_provenance(source, table.as_ref(), &defaults);
    let derived = DerivedSheets::build(&reconciliation.rows, &ctx.item_sheet_settings());

    info!(
        canonical_rows = reconciliation.rows.len(),
        unique_items = derived.item.len(),
        upc_rows = derived.item_upc.len(),
        duration_ms = start.elapsed().as_millis(),
        "built export"
    );

    ExportBundle {
        source_name: ctx.source_name.clone(),
        canonical: reconciliation.rows,
        derived,
        provenance: reconciliation.provenance,
    }
}
