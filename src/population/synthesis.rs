//! Build sector-by-tier tables from coarser published counts.
//!
//! Counts are split with integer arithmetic (round half up) so the output
//! is deterministic.

use super::naics::NaicsSector;
use super::table::{PopulationRow, PopulationTable};
use super::tier::TierPartition;
use crate::errors::{BudgetError, Result};

fn check_alignment(partition: &TierPartition, tier_counts: &[u64]) -> Result<()> {
    if partition.len() != tier_counts.len() {
        return Err(BudgetError::invalid_input(format!(
            "{} tier counts supplied for a partition of {} tiers",
            tier_counts.len(),
            partition.len()
        )));
    }
    Ok(())
}

fn rounded_div(numerator: u128, denominator: u128) -> u64 {
    ((numerator + denominator / 2) / denominator) as u64
}

/// Split every national tier count evenly across `sectors`.
///
/// Uncoded records are split the same way.
pub fn synthesize_even_split(
    partition: &TierPartition,
    tier_counts: &[u64],
    uncoded: u64,
    sectors: &[NaicsSector],
) -> Result<PopulationTable> {
    check_alignment(partition, tier_counts)?;
    if sectors.is_empty() {
        return Ok(PopulationTable::new());
    }
    let n = sectors.len() as u128;

    let mut table = PopulationTable::new();
    for sector in sectors {
        for (tier, count) in partition.tiers().iter().zip(tier_counts) {
            table.push(PopulationRow::coded(
                sector.name,
                *tier,
                rounded_div(*count as u128, n),
            ));
        }
        if uncoded > 0 {
            table.push(PopulationRow::uncoded(
                sector.name,
                rounded_div(uncoded as u128, n),
            ));
        }
    }
    Ok(table)
}

/// Distribute each sector's entity total across tiers in proportion to the
/// national tier distribution.
pub fn synthesize_from_sector_totals(
    partition: &TierPartition,
    tier_counts: &[u64],
    sectors: &[NaicsSector],
) -> Result<PopulationTable> {
    check_alignment(partition, tier_counts)?;
    let national: u128 = tier_counts.iter().map(|c| *c as u128).sum();
    if national == 0 {
        return Err(BudgetError::invalid_input(
            "national tier counts sum to zero, nothing to distribute",
        ));
    }

    let mut table = PopulationTable::new();
    for sector in sectors {
        for (tier, count) in partition.tiers().iter().zip(tier_counts) {
            let share = rounded_div(sector.entities as u128 * *count as u128, national);
            table.push(PopulationRow::coded(sector.name, *tier, share));
        }
    }
    Ok(table)
}
