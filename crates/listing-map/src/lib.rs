//! Header matching and field coverage for listing analysis.
//!
//! # Features
//!
//! - **Header Index**: one normalization rule (trim + lowercase) for every
//!   header comparison
//! - **Field Analyzer**: complete / partial / missing coverage per target column
//! - **Item Identity**: identity cells, lookup keys and unique item listings
//! - **Supplemental Fields**: which default prompts are still relevant

mod analyzer;
mod fields;
mod header;
mod identity;

// === Header Matching ===
pub use header::{HeaderIndex, normalize_header};

// === Field Analysis ===
pub use analyzer::{
    FieldAnalysis, FillStatus, FillThresholds, MatchedField, analyze, analyze_with,
};

// === Item Identity ===
pub use identity::{KeyOrigin, identity_key, item_identity, supplemental_key, unique_items};

// === Supplemental Fields ===
pub use fields::relevant_supplemental_fields;
