//! Budget derivation from revenue and percentage parameters.
//!
//! All functions here are pure. Percentages are not range-checked: callers
//! validate them at the boundary (see [`PercentPair::validate`]).
//!
//! ```rust
//! use secbudget::budget;
//!
//! let result = budget::compute(200.0, 11.5, 15.0);
//! assert!((result.it_budget - 23.0).abs() < 1e-12);
//! assert!((result.security_budget - 3.45).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::benchmarks::BenchmarkEntry;
use crate::core::{BudgetResult, PercentPair};

/// Lower, typical and upper (IT %, security %) pairs of a benchmark entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBounds {
    pub lower: PercentPair,
    pub typical: PercentPair,
    pub upper: PercentPair,
}

/// `it_budget = revenue * it% / 100`, `security_budget = it_budget * sec% / 100`.
pub fn compute(revenue: f64, it_percent: f64, security_percent: f64) -> BudgetResult {
    // Scaling by a fraction <= 1 keeps each budget at or below its base
    // under rounding.
    let it_budget = revenue * (it_percent / 100.0);
    let security_budget = it_budget * (security_percent / 100.0);
    BudgetResult {
        revenue,
        it_percent,
        security_percent,
        it_budget,
        security_budget,
    }
}

pub fn compute_pair(revenue: f64, percents: PercentPair) -> BudgetResult {
    compute(revenue, percents.it_percent, percents.security_percent)
}

pub fn scenario_bounds(entry: &BenchmarkEntry) -> ScenarioBounds {
    ScenarioBounds {
        lower: entry.lower(),
        typical: entry.typical(),
        upper: entry.upper(),
    }
}

/// Headline figures for one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub result: BudgetResult,
    /// Security spend as a percentage of revenue
    pub effective_security_rate: f64,
    /// Security budget at the lower and upper bounds, when bounds were given
    pub range: Option<BudgetRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub lower: BudgetResult,
    pub upper: BudgetResult,
}

pub fn summarize(
    revenue: f64,
    selected: PercentPair,
    bounds: Option<&ScenarioBounds>,
) -> BudgetSummary {
    BudgetSummary {
        result: compute_pair(revenue, selected),
        effective_security_rate: selected.effective_rate(),
        range: bounds.map(|b| BudgetRange {
            lower: compute_pair(revenue, b.lower),
            upper: compute_pair(revenue, b.upper),
        }),
    }
}
