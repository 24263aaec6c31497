//! Value resolution for canonical columns.
//!
//! Each canonical value is taken from the first resolver in an ordered chain
//! that yields one:
//!
//! 1. **SourceRowResolver** - the source row, any header casing
//! 2. **SupplementalResolver** - the supplemental row for the item
//! 3. **GlobalDefaultResolver** - the run's global default for the column
//!
//! When no resolver yields a value the column holds the empty string.

use serde::Serialize;

use listing_map::HeaderIndex;
use listing_model::{CellValue, Record};

use crate::defaults::GlobalDefaults;
use crate::supplemental::SupplementalTable;

/// Which resolver supplied a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Source,
    Supplemental,
    GlobalDefault,
    Empty,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Supplemental => "supplemental",
            Self::GlobalDefault => "default",
            Self::Empty => "empty",
        }
    }
}

/// A source row being reconciled.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub record: &'a Record,
    /// Header index over the whole source collection.
    pub index: &'a HeaderIndex,
    /// Trimmed, uppercased item identity, if the row has one.
    pub item_key: Option<&'a str>,
}

/// One step of the fill-precedence chain.
pub trait ValueResolver {
    /// Returns a non-blank value for `column`, or `None` to defer to the next
    /// resolver.
    fn resolve(&self, row: &RowContext<'_>, column: &str) -> Option<CellValue>;

    /// The provenance reported for values from this resolver.
    fn source(&self) -> ValueSource;
}

/// Reads the column from the source row itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRowResolver;

impl ValueResolver for SourceRowResolver {
    fn resolve(&self, row: &RowContext<'_>, column: &str) -> Option<CellValue> {
        row.index.lookup_filled(row.record, column).cloned()
    }

    fn source(&self) -> ValueSource {
        ValueSource::Source
    }
}

/// Reads the column from the supplemental row matching the item identity.
#[derive(Debug, Clone, Copy)]
pub struct SupplementalResolver<'a> {
    table: &'a SupplementalTable,
}

impl<'a> SupplementalResolver<'a> {
    pub fn new(table: &'a SupplementalTable) -> Self {
        Self { table }
    }
}

impl ValueResolver for SupplementalResolver<'_> {
    fn resolve(&self, row: &RowContext<'_>, column: &str) -> Option<CellValue> {
        let key = row.item_key?;
        self.table.lookup(key, column).cloned()
    }

    fn source(&self) -> ValueSource {
        ValueSource::Supplemental
    }
}

/// Applies the run's global default for the column.
#[derive(Debug, Clone, Copy)]
pub struct GlobalDefaultResolver<'a> {
    defaults: &'a GlobalDefaults,
}

impl<'a> GlobalDefaultResolver<'a> {
    pub fn new(defaults: &'a GlobalDefaults) -> Self {
        Self { defaults }
    }
}

impl ValueResolver for GlobalDefaultResolver<'_> {
    fn resolve(&self, _row: &RowContext<'_>, column: &str) -> Option<CellValue> {
        self.defaults.get(column).cloned()
    }

    fn source(&self) -> ValueSource {
        ValueSource::GlobalDefault
    }
}

/// A resolved canonical value and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValue {
    pub value: CellValue,
    pub source: ValueSource,
}

impl ResolvedValue {
    fn empty() -> Self {
        Self {
            value: CellValue::empty_text(),
            source: ValueSource::Empty,
        }
    }
}

/// An ordered list of resolvers with early exit.
#[derive(Default)]
pub struct ResolverChain<'a> {
    resolvers: Vec<Box<dyn ValueResolver + 'a>>,
}

impl<'a> ResolverChain<'a> {
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// The standard chain: source row, supplemental table (when given),
    /// global defaults.
    pub fn standard(
        supplemental: Option<&'a SupplementalTable>,
        defaults: &'a GlobalDefaults,
    ) -> Self {
        let mut chain = Self::new().with(SourceRowResolver);
        if let Some(table) = supplemental {
            chain = chain.with(SupplementalResolver::new(table));
        }
        chain.with(GlobalDefaultResolver::new(defaults))
    }

    /// Appends a resolver to the end of the chain.
    #[must_use]
    pub fn with(mut self, resolver: impl ValueResolver + 'a) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolves one column, stopping at the first resolver with a value.
    pub fn resolve(&self, row: &RowContext<'_>, column: &str) -> ResolvedValue {
        self.resolvers
            .iter()
            .find_map(|resolver| {
                resolver.resolve(row, column).map(|value| ResolvedValue {
                    value,
                    source: resolver.source(),
                })
            })
            .unwrap_or_else(ResolvedValue::empty)
    }
}
