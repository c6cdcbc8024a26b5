//! Many-to-one mapping from raw sector labels to benchmark categories.
//!
//! Labels are matched case-insensitively after trimming. A label may be a
//! NAICS sector name, one of its short aliases, the sector code (`"52"`,
//! `"31-33"`), or the combined `"code - name"` form used by sector pickers.

use std::collections::HashMap;

use super::standard::StandardCategory;
use crate::errors::{BudgetError, Result};
use crate::population::naics::{NaicsSector, NAICS_SECTORS};
use crate::population::PopulationTable;

/// NAICS sector code to benchmark category. Sectors not listed here fall
/// back to [`StandardCategory::DEFAULT`].
const NAICS_CATEGORY_CODES: &[(&str, StandardCategory)] = &[
    ("21", StandardCategory::EnergyUtilities),
    ("22", StandardCategory::EnergyUtilities),
    ("31-33", StandardCategory::Manufacturing),
    ("42", StandardCategory::Retail),
    ("44-45", StandardCategory::Retail),
    ("48-49", StandardCategory::TransportationLogistics),
    ("51", StandardCategory::Technology),
    ("52", StandardCategory::FinancialServices),
    ("54", StandardCategory::Technology),
    ("61", StandardCategory::Education),
    ("62", StandardCategory::Healthcare),
    ("92", StandardCategory::GovernmentPublicSector),
];

#[derive(Debug, Clone, Default)]
pub struct ClassificationMapping {
    labels: HashMap<String, StandardCategory>,
}

impl ClassificationMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for the NAICS sectors: code, full name and aliases of every
    /// mapped sector.
    pub fn naics() -> Self {
        let mut mapping = Self::new();
        for sector in NAICS_SECTORS {
            let Some(category) = NAICS_CATEGORY_CODES
                .iter()
                .find(|(code, _)| *code == sector.code)
                .map(|(_, category)| *category)
            else {
                continue;
            };
            mapping.insert(sector.code, category);
            mapping.insert(sector.name, category);
            for alias in sector.aliases {
                mapping.insert(alias, category);
            }
        }
        mapping
    }

    pub fn insert(&mut self, label: &str, category: StandardCategory) {
        self.labels.insert(normalize(label), category);
    }

    /// Explicit mapping for `raw_label`, if any.
    pub fn category_for(&self, raw_label: &str) -> Option<StandardCategory> {
        let key = normalize(raw_label);
        if let Some(category) = self.labels.get(&key) {
            return Some(*category);
        }
        // "52 - Finance and Insurance"
        let (code, name) = key.split_once(" - ")?;
        self.labels
            .get(code.trim())
            .or_else(|| self.labels.get(name.trim()))
            .copied()
    }

    /// Every mapped label (normalized) with its category.
    pub fn labels(&self) -> impl Iterator<Item = (&str, StandardCategory)> {
        self.labels.iter().map(|(label, cat)| (label.as_str(), *cat))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// NAICS sector named by `raw_label`, matched the same way as mapping
/// labels.
pub fn naics_sector(raw_label: &str) -> Option<&'static NaicsSector> {
    let key = normalize(raw_label);
    sector_for_key(&key).or_else(|| {
        let (code, name) = key.split_once(" - ")?;
        sector_for_key(code.trim()).or_else(|| sector_for_key(name.trim()))
    })
}

fn sector_for_key(key: &str) -> Option<&'static NaicsSector> {
    NAICS_SECTORS.iter().find(|sector| {
        sector.code == key
            || normalize(sector.name) == key
            || sector.aliases.iter().any(|alias| normalize(alias) == key)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterKey {
    /// NAICS sector code
    Sector(&'static str),
    /// Normalized label that names no NAICS sector
    Label(String),
}

impl FilterKey {
    fn matches(&self, raw_label: &str) -> bool {
        match self {
            Self::Sector(code) => naics_sector(raw_label).is_some_and(|s| s.code == *code),
            Self::Label(label) => normalize(raw_label) == *label,
        }
    }
}

/// A subset of classifications to aggregate over.
///
/// A requested label that names a NAICS sector (code, name, alias or
/// `"code - name"`) selects every row labelled with any form of that sector;
/// other labels match rows case-insensitively. `"All"` selects everything
/// and is ignored next to specific labels. An empty filter keeps all rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationFilter {
    requested: Vec<(String, FilterKey)>,
}

impl ClassificationFilter {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .filter(|label| !label.is_empty() && !label.eq_ignore_ascii_case("all"))
            .map(|label| {
                let key = match naics_sector(&label) {
                    Some(sector) => FilterKey::Sector(sector.code),
                    None => FilterKey::Label(normalize(&label)),
                };
                (label, key)
            })
            .collect();
        Self { requested }
    }

    /// True when every classification is selected.
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// Requested labels as given, without `"All"`.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.requested.iter().map(|(label, _)| label.as_str())
    }

    pub fn matches(&self, raw_label: &str) -> bool {
        self.is_empty() || self.requested.iter().any(|(_, key)| key.matches(raw_label))
    }

    /// Rows of `population` whose classification is selected.
    ///
    /// Fails with `InvalidInput` when a requested label matches no row.
    pub fn apply(&self, population: &PopulationTable) -> Result<PopulationTable> {
        if self.is_empty() {
            return Ok(population.clone());
        }
        let classifications = population.classifications();
        if let Some((label, _)) = self
            .requested
            .iter()
            .find(|(_, key)| !classifications.iter().any(|c| key.matches(c)))
        {
            return Err(BudgetError::invalid_input(format!(
                "no population rows for classification '{label}'"
            )));
        }
        Ok(population.filter_classifications(|label| self.matches(label)))
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
