//! Pipeline context for one export.
//!
//! The [`PipelineContext`] carries everything a run needs besides the rows
//! themselves: the source file name and the run configuration. It is built
//! once and passed by reference into each stage.

use listing_model::RunConfig;

use crate::defaults::GlobalDefaults;
use crate::derived::ItemSheetSettings;

/// Context for a single analysis export.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    /// Name of the uploaded source file (e.g. "listings.xlsx").
    pub source_name: String,
    /// Run configuration (defaults, harmonized code, origin country).
    pub config: RunConfig,
}

impl PipelineContext {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            config: RunConfig::default(),
        }
    }

    /// Sets the run configuration.
    #[must_use]
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Global defaults resolved against the target schema.
    pub fn global_defaults(&self) -> GlobalDefaults {
        GlobalDefaults::from_pairs(&self.config.global_defaults)
    }

    /// Settings stamped onto the `Item` sheet.
    pub fn item_sheet_settings(&self) -> ItemSheetSettings {
        ItemSheetSettings {
            harmonized_code: self.config.harmonized_code.clone(),
            origin_country: self.config.origin_country.clone(),
        }
    }
}
