use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::classification::ClassificationMapping;
use super::entry::{BenchmarkEntry, PercentRange};
use super::standard::StandardCategory;
use crate::errors::{BudgetError, Result};

/// Typed benchmark store: immutable standard entries plus session-scoped
/// custom entries, and the classification mapping used to resolve raw
/// sector labels.
///
/// Standard entries can never be replaced. Custom entries are appended,
/// replaced by name, or cleared as a whole.
#[derive(Debug, Clone)]
pub struct BenchmarkCatalog {
    standard: Vec<BenchmarkEntry>,
    custom: Vec<BenchmarkEntry>,
    mapping: ClassificationMapping,
}

/// One row of the benchmark comparison view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub category: String,
    pub custom: bool,
    pub it: PercentRange,
    pub security: PercentRange,
    /// Typical security spend as a percentage of revenue
    pub effective_security_rate: f64,
}

impl Default for BenchmarkCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl BenchmarkCatalog {
    /// Catalog seeded with the standard categories and NAICS mapping.
    pub fn standard() -> Self {
        Self::with_mapping(ClassificationMapping::naics())
    }

    pub fn with_mapping(mapping: ClassificationMapping) -> Self {
        Self {
            standard: StandardCategory::ALL.iter().map(|c| c.entry()).collect(),
            custom: Vec::new(),
            mapping,
        }
    }

    /// Look up a category by exact name in the standard, then custom, set.
    pub fn lookup(&self, category: &str) -> Result<&BenchmarkEntry> {
        let name = category.trim();
        self.standard
            .iter()
            .chain(self.custom.iter())
            .find(|entry| entry.category_name == name)
            .ok_or_else(|| BudgetError::unknown_category(name))
    }

    pub fn standard_entry(&self, category: StandardCategory) -> &BenchmarkEntry {
        &self.standard[category.index()]
    }

    pub fn default_entry(&self) -> &BenchmarkEntry {
        self.standard_entry(StandardCategory::DEFAULT)
    }

    /// Resolve a raw classification label to a benchmark entry.
    ///
    /// Category names resolve to themselves; other labels go through the
    /// classification mapping and fall back to the default category. Never
    /// fails.
    pub fn resolve_classification(&self, raw_label: &str) -> &BenchmarkEntry {
        if let Ok(entry) = self.lookup(raw_label) {
            return entry;
        }
        match self.mapping.category_for(raw_label) {
            Some(category) => self.standard_entry(category),
            None => {
                debug!(label = raw_label, "No classification mapping, using default");
                self.default_entry()
            }
        }
    }

    /// Insert or replace a custom category.
    ///
    /// Fails with `InvalidRange` when either axis breaks
    /// `min <= typical <= max`, and with `InvalidCategoryName` for empty
    /// names or names taken by a standard category.
    pub fn add_custom(
        &mut self,
        name: &str,
        it: PercentRange,
        security: PercentRange,
    ) -> Result<&BenchmarkEntry> {
        let name = name.trim();
        if name.is_empty() || StandardCategory::from_name(name).is_some() {
            return Err(BudgetError::InvalidCategoryName(name.to_string()));
        }
        let entry = BenchmarkEntry::new(name, it, security)?;

        let position = match self.custom.iter().position(|e| e.category_name == name) {
            Some(position) => {
                debug!(category = name, "Replacing custom benchmark");
                self.custom[position] = entry;
                position
            }
            None => {
                info!(category = name, "Adding custom benchmark");
                self.custom.push(entry);
                self.custom.len() - 1
            }
        };
        Ok(&self.custom[position])
    }

    /// Remove every custom entry; standard entries are untouched.
    pub fn clear_custom(&mut self) {
        debug!(removed = self.custom.len(), "Clearing custom benchmarks");
        self.custom.clear();
    }

    pub fn custom_entries(&self) -> &[BenchmarkEntry] {
        &self.custom
    }

    /// Standard entries in declaration order, then custom entries in
    /// insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &BenchmarkEntry> {
        self.standard.iter().chain(self.custom.iter())
    }

    pub fn is_custom(&self, category: &str) -> bool {
        self.custom.iter().any(|e| e.category_name == category)
    }

    pub fn mapping(&self) -> &ClassificationMapping {
        &self.mapping
    }

    pub fn comparison(&self) -> Vec<BenchmarkComparison> {
        self.entries()
            .map(|entry| BenchmarkComparison {
                category: entry.category_name.clone(),
                custom: self.is_custom(&entry.category_name),
                it: entry.it,
                security: entry.security,
                effective_security_rate: entry.typical().effective_rate(),
            })
            .collect()
    }
}
