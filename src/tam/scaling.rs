//! Normalization of the aggregate security TAM to an external target.
//!
//! Scaling multiplies every security TAM figure by one factor so the total
//! matches the target while relative proportions across classifications
//! and tiers stay intact. It recalibrates the output to an asserted market
//! size; it does not correct the underlying model. IT TAM is untouched.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::aggregate::{sum_totals, TamReport};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScalingOutcome {
    NotRequested,
    Applied {
        target: f64,
        factor: f64,
        unscaled_security_tam: f64,
    },
    /// The aggregate security TAM was zero, so no factor exists.
    Skipped { target: f64 },
}

impl ScalingOutcome {
    pub fn factor(&self) -> f64 {
        match self {
            Self::Applied { factor, .. } => *factor,
            _ => 1.0,
        }
    }
}

pub(super) fn apply_scaling(report: &mut TamReport, target: f64) -> ScalingOutcome {
    let unscaled = report.totals.security_budget_tam;
    if unscaled == 0.0 {
        warn!(target, "Security TAM is zero, skipping scaling");
        return ScalingOutcome::Skipped { target };
    }

    let factor = target / unscaled;
    for result in &mut report.classifications {
        result.security_budget_tam *= factor;
    }
    for tier in &mut report.tiers {
        tier.security_budget_tam *= factor;
    }
    report.totals = sum_totals(&report.classifications);

    info!(target, factor, unscaled, "Scaled security TAM");
    ScalingOutcome::Applied {
        target,
        factor,
        unscaled_security_tam: unscaled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::BenchmarkCatalog;
    use crate::population::naics::national_population;
    use crate::population::{PopulationRow, PopulationTable, TierBounds};
    use crate::tam::aggregate;

    #[test]
    fn scaling_hits_target_and_keeps_proportions() {
        let catalog = BenchmarkCatalog::standard();
        let population = PopulationTable::from_rows(vec![
            PopulationRow::coded("Information", TierBounds::new(0.0, 0.5), 10),
            PopulationRow::coded("Retail Trade", TierBounds::new(0.0, 0.5), 30),
        ]);
        let plain = aggregate(&catalog, &population, None).unwrap();
        let scaled = aggregate(&catalog, &population, Some(1_000.0)).unwrap();

        assert!((scaled.totals.security_budget_tam - 1_000.0).abs() < 1e-6);
        let ratio = |r: &TamReport| {
            r.classifications[0].security_budget_tam / r.classifications[1].security_budget_tam
        };
        assert!((ratio(&plain) - ratio(&scaled)).abs() < 1e-9);
        assert_eq!(plain.totals.it_budget_tam, scaled.totals.it_budget_tam);
    }

    #[test]
    fn scaling_to_own_total_is_identity() {
        let catalog = BenchmarkCatalog::standard();
        let population = national_population();
        let plain = aggregate(&catalog, &population, None).unwrap();
        let scaled = aggregate(
            &catalog,
            &population,
            Some(plain.totals.security_budget_tam),
        )
        .unwrap();
        assert_eq!(scaled.scaling.factor(), 1.0);
        assert_eq!(plain.classifications, scaled.classifications);
        assert_eq!(plain.totals, scaled.totals);
        assert_eq!(plain.tiers, scaled.tiers);
    }

    #[test]
    fn zero_total_skips_scaling() {
        let catalog = BenchmarkCatalog::standard();
        let population = PopulationTable::from_rows(vec![PopulationRow::coded(
            "Utilities",
            TierBounds::new(0.0, 0.5),
            0,
        )]);
        let report = aggregate(&catalog, &population, Some(180_000.0)).unwrap();
        assert_eq!(
            report.scaling,
            ScalingOutcome::Skipped { target: 180_000.0 }
        );
        assert_eq!(report.totals.security_budget_tam, 0.0);
    }
}
