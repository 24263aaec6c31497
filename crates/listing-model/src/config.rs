//! Per-run configuration.
//!
//! A run is configured once: global default values for target columns plus
//! the harmonized tariff code and origin country stamped on the `Item`
//! sheet. Configuration can be read from TOML and then overridden field by
//! field.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Run configuration.
///
/// ```toml
/// harmonized_code = "8414.59.6590"
/// origin_country = "CN"
///
/// [defaults]
/// "Unit Cost" = "12.50"
/// Vendor = "Maxiforce"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Default value per target column, keyed as written by the user.
    #[serde(rename = "defaults")]
    pub global_defaults: BTreeMap<String, String>,

    /// Harmonized tariff code for the `Item` sheet.
    pub harmonized_code: String,

    /// Origin country for the `Item` sheet.
    pub origin_country: String,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| ModelError::ConfigParse { source })
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Sets a default value for a column, replacing any previous one.
    #[must_use]
    pub fn with_default(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_defaults.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_harmonized_code(mut self, code: impl Into<String>) -> Self {
        self.harmonized_code = code.into();
        self
    }

    #[must_use]
    pub fn with_origin_country(mut self, country: impl Into<String>) -> Self {
        self.origin_country = country.into();
        self
    }

    /// Applies a `COLUMN=VALUE` assignment.
    ///
    /// The column is trimmed; the value is kept as written so that explicit
    /// whitespace survives until the blank check at fill time.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (column, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| ModelError::InvalidDefault {
                    assignment: assignment.to_string(),
                })?;
        let column = column.trim();
        if column.is_empty() {
            return Err(ModelError::InvalidDefault {
                assignment: assignment.to_string(),
            });
        }
        self.global_defaults
            .insert(column.to_string(), value.to_string());
        Ok(())
    }
}
