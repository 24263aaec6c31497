//! Listing reconciliation and derived sheet generation.
//!
//! Merges source rows, an optional supplemental table and global defaults
//! into canonical rows, then fans those rows out into the derived
//! `ItemVendor`, `Item`, `Pack` and `ItemUPC` sheets.

pub mod context;
pub mod defaults;
pub mod derived;
pub mod pipeline;
pub mod reconcile;
pub mod resolver;
pub mod supplemental;

// === Context ===
pub use context::PipelineContext;

// === Fill Sources ===
pub use defaults::GlobalDefaults;
pub use resolver::{
    GlobalDefaultResolver, ResolvedValue, ResolverChain, RowContext, SourceRowResolver,
    SupplementalResolver, ValueResolver, ValueSource,
};
pub use supplemental::SupplementalTable;

// === Reconciliation ===
pub use reconcile::{
    ColumnProvenance, FillProvenance, Reconciliation, SourceCounts, reconcile,
    reconcile_with_provenance,
};

// === Derived Sheets ===
pub use derived::{
    DerivedSheets, ItemSheetSettings, build_item_sheet, build_item_upc_sheet,
    build_item_vendor_sheet, build_pack_sheet, distinct_items,
};

// === Export ===
pub use pipeline::{ExportBundle, SheetCount, build_export};
