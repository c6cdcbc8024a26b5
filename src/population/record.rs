//! Flat serde shape for population rows handed over by an external loader.
//!
//! ```json
//! { "rows": [
//!   { "classification": "Retail Trade", "low": 0.0, "high": 0.5, "count": 120 },
//!   { "classification": "Retail Trade", "low": 1000.0, "count": 4 },
//!   { "classification": "Retail Trade", "uncoded": true, "count": 31 }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use super::table::{PopulationRow, PopulationTable, TierBucket};
use super::tier::TierBounds;
use crate::errors::{BudgetError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Omitted for the open-ended top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    pub count: u64,
    /// Entities with no known revenue tier; such rows must carry no bounds
    #[serde(default)]
    pub uncoded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationFile {
    #[serde(default)]
    pub rows: Vec<PopulationRecord>,
}

impl TryFrom<PopulationRecord> for PopulationRow {
    type Error = BudgetError;

    fn try_from(record: PopulationRecord) -> Result<Self> {
        let bucket = if record.uncoded {
            if record.low.is_some() || record.high.is_some() {
                return Err(BudgetError::invalid_input(format!(
                    "uncoded row for '{}' must not have tier bounds",
                    record.classification
                )));
            }
            TierBucket::Uncoded
        } else {
            let low = record.low.ok_or_else(|| {
                BudgetError::invalid_input(format!(
                    "coded row for '{}' has no lower tier bound",
                    record.classification
                ))
            })?;
            TierBucket::Coded(TierBounds {
                low,
                high: record.high,
            })
        };
        Ok(PopulationRow {
            classification: record.classification,
            bucket,
            entity_count: record.count,
        })
    }
}

impl From<&PopulationRow> for PopulationRecord {
    fn from(row: &PopulationRow) -> Self {
        let (low, high, uncoded) = match row.bucket {
            TierBucket::Coded(tier) => (Some(tier.low), tier.high, false),
            TierBucket::Uncoded => (None, None, true),
        };
        Self {
            classification: row.classification.clone(),
            low,
            high,
            count: row.entity_count,
            uncoded,
        }
    }
}

impl PopulationFile {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| BudgetError::invalid_input(format!("invalid population JSON: {e}")))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| BudgetError::invalid_input(format!("invalid population TOML: {e}")))
    }

    pub fn into_table(self) -> Result<PopulationTable> {
        self.rows
            .into_iter()
            .map(PopulationRow::try_from)
            .collect::<Result<Vec<_>>>()
            .map(PopulationTable::from_rows)
    }
}

impl From<&PopulationTable> for PopulationFile {
    fn from(table: &PopulationTable) -> Self {
        Self {
            rows: table.rows().iter().map(PopulationRecord::from).collect(),
        }
    }
}
