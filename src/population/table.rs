use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::tier::{TierBounds, TierPartition};
use crate::errors::{BudgetError, Result};

/// Where a population row's entities sit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierBucket {
    /// Entities with revenue data falling in the given tier
    Coded(TierBounds),
    /// Entities without tier-specific revenue data
    Uncoded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRow {
    pub classification: String,
    pub bucket: TierBucket,
    pub entity_count: u64,
}

impl PopulationRow {
    pub fn coded(classification: impl Into<String>, tier: TierBounds, entity_count: u64) -> Self {
        Self {
            classification: classification.into(),
            bucket: TierBucket::Coded(tier),
            entity_count,
        }
    }

    pub fn uncoded(classification: impl Into<String>, entity_count: u64) -> Self {
        Self {
            classification: classification.into(),
            bucket: TierBucket::Uncoded,
            entity_count,
        }
    }

    pub fn is_coded(&self) -> bool {
        matches!(self.bucket, TierBucket::Coded(_))
    }
}

/// Classification-by-revenue-tier entity counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationTable {
    rows: Vec<PopulationRow>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTotals {
    pub coded: u64,
    pub uncoded: u64,
}

impl EntityTotals {
    /// Exact for totals returned by [`PopulationTable::totals`].
    pub fn total(&self) -> u64 {
        self.coded.saturating_add(self.uncoded)
    }
}

/// Share of coded entities in one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierShare {
    pub tier: TierBounds,
    pub label: String,
    pub entity_count: u64,
    /// Percentage of all coded entities; uncoded entities are not in the base
    pub percentage: f64,
}

impl PopulationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<PopulationRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: PopulationRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[PopulationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct classification labels, sorted.
    pub fn classifications(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .map(|row| row.classification.as_str())
            .collect()
    }

    /// Keep only rows whose classification satisfies `keep`.
    pub fn filter_classifications(&self, keep: impl Fn(&str) -> bool) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|row| keep(&row.classification))
                .cloned()
                .collect(),
        }
    }

    /// Coded and uncoded entity counts.
    ///
    /// Fails with `InvalidInput` when the counts of all rows together do not
    /// fit in a `u64`. Any subset of rows sums to at most this total.
    pub fn totals(&self) -> Result<EntityTotals> {
        let mut totals = EntityTotals::default();
        let mut all = 0u64;
        for row in &self.rows {
            all = add_counts(all, row.entity_count)?;
            if row.is_coded() {
                totals.coded += row.entity_count;
            } else {
                totals.uncoded += row.entity_count;
            }
        }
        Ok(totals)
    }

    /// Coded entity counts per tier of `partition`, in partition order.
    ///
    /// Fails with `UnknownTier` when a row names a tier outside the
    /// partition, and with `InvalidInput` when the counts overflow.
    pub fn tier_counts(&self, partition: &TierPartition) -> Result<Vec<u64>> {
        self.totals()?;
        let mut counts = vec![0u64; partition.len()];
        for row in &self.rows {
            if let TierBucket::Coded(tier) = &row.bucket {
                counts[partition.index_of(tier)?] += row.entity_count;
            }
        }
        Ok(counts)
    }

    pub fn tier_distribution(&self, partition: &TierPartition) -> Result<Vec<TierShare>> {
        let counts = self.tier_counts(partition)?;
        let coded: u64 = counts.iter().sum();
        Ok(partition
            .tiers()
            .iter()
            .zip(counts)
            .map(|(tier, entity_count)| TierShare {
                tier: *tier,
                label: tier.label(),
                entity_count,
                percentage: if coded == 0 {
                    0.0
                } else {
                    entity_count as f64 / coded as f64 * 100.0
                },
            })
            .collect())
    }
}

/// `total + count`, or `InvalidInput` on overflow.
fn add_counts(total: u64, count: u64) -> Result<u64> {
    total.checked_add(count).ok_or_else(|| {
        BudgetError::invalid_input(format!(
            "entity counts overflow: {total} + {count} exceeds {}",
            u64::MAX
        ))
    })
}

impl FromIterator<PopulationRow> for PopulationTable {
    fn from_iter<I: IntoIterator<Item = PopulationRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
