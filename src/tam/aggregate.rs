use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, info_span};

use super::scaling::{apply_scaling, ScalingOutcome};
use crate::benchmarks::BenchmarkCatalog;
use crate::budget;
use crate::errors::{BudgetError, Result};
use crate::population::{PopulationTable, TierBounds, TierBucket, TierPartition};

/// Market size for one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamResult {
    pub classification: String,
    /// Benchmark category the classification resolved to
    pub category: String,
    pub coded_entities: u64,
    pub uncoded_entities: u64,
    pub total_entities: u64,
    pub total_revenue_estimate: f64,
    pub it_budget_tam: f64,
    pub security_budget_tam: f64,
}

/// Market size for one revenue tier, summed over classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTamResult {
    pub tier: TierBounds,
    pub label: String,
    pub entity_count: u64,
    pub representative_revenue: f64,
    pub revenue_estimate: f64,
    pub it_budget_tam: f64,
    pub security_budget_tam: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TamTotals {
    pub coded_entities: u64,
    pub uncoded_entities: u64,
    pub total_entities: u64,
    pub total_revenue_estimate: f64,
    pub it_budget_tam: f64,
    pub security_budget_tam: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamReport {
    /// One row per classification, sorted by label
    pub classifications: Vec<TamResult>,
    /// One row per tier, in partition order
    pub tiers: Vec<TierTamResult>,
    pub totals: TamTotals,
    pub scaling: ScalingOutcome,
}

/// Combines benchmark lookups with population counts over a fixed tier
/// partition.
#[derive(Debug, Clone, Default)]
pub struct TamAggregator {
    partition: TierPartition,
}

#[derive(Default)]
struct CellCounts {
    coded: Vec<u64>,
    uncoded: u64,
}

impl TamAggregator {
    pub fn new(partition: TierPartition) -> Self {
        Self { partition }
    }

    pub fn partition(&self) -> &TierPartition {
        &self.partition
    }

    /// Aggregate IT and security TAM per classification and per tier.
    ///
    /// Counts are merged per (classification, tier) cell with integer sums
    /// before any floating point work, so row order never changes the
    /// result. Classifications with zero entities are kept with zero values.
    /// When `scaling_target` is given the security column is normalized to
    /// it; see [`ScalingOutcome`].
    pub fn aggregate(
        &self,
        catalog: &BenchmarkCatalog,
        population: &PopulationTable,
        scaling_target: Option<f64>,
    ) -> Result<TamReport> {
        let _span = info_span!("tam_aggregation", rows = population.len()).entered();

        if let Some(target) = scaling_target {
            if !target.is_finite() || target < 0.0 {
                return Err(BudgetError::invalid_input(format!(
                    "scaling target must be a non-negative number, got {target}"
                )));
            }
        }

        // Every per-cell, per-tier and total count below sums a subset of
        // the rows, so it cannot exceed this checked total.
        let entities = population.totals()?;
        debug!(
            coded = entities.coded,
            uncoded = entities.uncoded,
            "Population counts checked"
        );

        let cells = self.collect_cells(population)?;
        let representatives: Vec<f64> = (0..self.partition.len())
            .filter_map(|index| self.partition.representative_revenue(index))
            .collect();

        let mut tiers: Vec<TierTamResult> = self
            .partition
            .tiers()
            .iter()
            .zip(&representatives)
            .map(|(tier, representative)| TierTamResult {
                tier: *tier,
                label: tier.label(),
                entity_count: 0,
                representative_revenue: *representative,
                revenue_estimate: 0.0,
                it_budget_tam: 0.0,
                security_budget_tam: 0.0,
            })
            .collect();

        let mut classifications = Vec::with_capacity(cells.len());
        for (classification, counts) in &cells {
            let entry = catalog.resolve_classification(classification);
            let percents = entry.typical();

            let mut result = TamResult {
                classification: (*classification).to_string(),
                category: entry.category_name.clone(),
                coded_entities: 0,
                uncoded_entities: counts.uncoded,
                total_entities: 0,
                total_revenue_estimate: 0.0,
                it_budget_tam: 0.0,
                security_budget_tam: 0.0,
            };

            for (tier_row, count) in tiers.iter_mut().zip(&counts.coded) {
                let revenue = tier_row.representative_revenue * *count as f64;
                let contribution = budget::compute_pair(revenue, percents);

                result.coded_entities += count;
                result.total_revenue_estimate += revenue;
                result.it_budget_tam += contribution.it_budget;
                result.security_budget_tam += contribution.security_budget;

                tier_row.entity_count += count;
                tier_row.revenue_estimate += revenue;
                tier_row.it_budget_tam += contribution.it_budget;
                tier_row.security_budget_tam += contribution.security_budget;
            }
            result.total_entities = result.coded_entities + result.uncoded_entities;

            debug!(
                classification = %result.classification,
                category = %result.category,
                entities = result.total_entities,
                security_tam = result.security_budget_tam,
                "Classification aggregated"
            );
            classifications.push(result);
        }

        let totals = sum_totals(&classifications);
        let mut report = TamReport {
            classifications,
            tiers,
            totals,
            scaling: ScalingOutcome::NotRequested,
        };

        if let Some(target) = scaling_target {
            report.scaling = apply_scaling(&mut report, target);
        }

        info!(
            classifications = report.classifications.len(),
            it_tam = report.totals.it_budget_tam,
            security_tam = report.totals.security_budget_tam,
            "TAM aggregation complete"
        );
        Ok(report)
    }

    fn collect_cells<'a>(
        &self,
        population: &'a PopulationTable,
    ) -> Result<BTreeMap<&'a str, CellCounts>> {
        let mut cells: BTreeMap<&str, CellCounts> = BTreeMap::new();
        for row in population.rows() {
            let cell = cells
                .entry(row.classification.as_str())
                .or_insert_with(|| CellCounts {
                    coded: vec![0; self.partition.len()],
                    uncoded: 0,
                });
            match &row.bucket {
                TierBucket::Coded(tier) => {
                    let index = self.partition.index_of(tier)?;
                    cell.coded[index] += row.entity_count;
                }
                TierBucket::Uncoded => cell.uncoded += row.entity_count,
            }
        }
        Ok(cells)
    }
}

pub(super) fn sum_totals(classifications: &[TamResult]) -> TamTotals {
    classifications
        .iter()
        .fold(TamTotals::default(), |mut totals, result| {
            totals.coded_entities += result.coded_entities;
            totals.uncoded_entities += result.uncoded_entities;
            totals.total_entities += result.total_entities;
            totals.total_revenue_estimate += result.total_revenue_estimate;
            totals.it_budget_tam += result.it_budget_tam;
            totals.security_budget_tam += result.security_budget_tam;
            totals
        })
}

/// Aggregate over the NAICS tier partition.
pub fn aggregate(
    catalog: &BenchmarkCatalog,
    population: &PopulationTable,
    scaling_target: Option<f64>,
) -> Result<TamReport> {
    TamAggregator::default().aggregate(catalog, population, scaling_target)
}
