use serde::Serialize;

use crate::benchmarks::BenchmarkComparison;
use crate::budget::BudgetSummary;
use crate::core::PercentPair;
use crate::population::TierShare;
use crate::scenario::{BudgetTable, SeriesBundle};
use crate::tam::TamReport;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub category: String,
    pub summary: BudgetSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub category: String,
    pub revenue: f64,
    pub selected: PercentPair,
    pub bundle: SeriesBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<BudgetTable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TamOutput {
    /// Where the population came from
    pub source: String,
    pub report: TamReport,
    pub distribution: Vec<TierShare>,
    /// Render the per-tier breakdown
    #[serde(skip)]
    pub by_tier: bool,
}

/// Everything a command can hand to an [`super::output::OutputWriter`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Budget(BudgetReport),
    Scenario(ScenarioReport),
    Tam(TamOutput),
    Benchmarks { entries: Vec<BenchmarkComparison> },
}
