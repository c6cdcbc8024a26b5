use serde::{Deserialize, Serialize};

use super::points::validate_revenue_points;
use crate::budget;
use crate::core::PercentPair;
use crate::errors::Result;
use crate::session::CalculationLogEntry;

/// Security percentages always shown in the budget table.
pub const STANDARD_SECURITY_PERCENTAGES: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

/// Rows within this distance (millions) of the selected revenue are
/// highlighted.
pub const HIGHLIGHT_DISTANCE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetColumn {
    pub label: String,
    pub percents: PercentPair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTableRow {
    pub revenue: f64,
    pub it_budget: f64,
    /// One value per column, same order as [`BudgetTable::columns`]
    pub security_budgets: Vec<f64>,
    pub highlighted: bool,
}

/// Security budgets per revenue point at the standard percentages, the
/// user's percentage and each saved calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTable {
    pub it_percent: f64,
    pub columns: Vec<BudgetColumn>,
    pub rows: Vec<BudgetTableRow>,
}

impl BudgetTable {
    /// Standard columns use the selected IT percentage; saved calculations
    /// keep their own. Zero revenue points produce no row.
    pub fn build(
        revenue_points: &[f64],
        selected: PercentPair,
        log: &[CalculationLogEntry],
        highlight_revenue: Option<f64>,
    ) -> Result<Self> {
        validate_revenue_points(revenue_points)?;
        let it_percent = selected.it_percent;

        let mut columns: Vec<BudgetColumn> = STANDARD_SECURITY_PERCENTAGES
            .iter()
            .map(|security| BudgetColumn {
                label: format!("{security}% of IT"),
                percents: PercentPair::new(it_percent, *security),
            })
            .collect();
        if !STANDARD_SECURITY_PERCENTAGES.contains(&selected.security_percent) {
            columns.push(BudgetColumn {
                label: format!("User ({}% of IT)", selected.security_percent),
                percents: selected,
            });
        }
        columns.extend(log.iter().enumerate().map(|(index, entry)| {
            let percents = entry.percents();
            BudgetColumn {
                label: format!("Calc #{} ({percents})", index + 1),
                percents,
            }
        }));

        let rows = revenue_points
            .iter()
            .filter(|revenue| **revenue > 0.0)
            .map(|revenue| BudgetTableRow {
                revenue: *revenue,
                it_budget: budget::compute_pair(*revenue, selected).it_budget,
                security_budgets: columns
                    .iter()
                    .map(|column| budget::compute_pair(*revenue, column.percents).security_budget)
                    .collect(),
                highlighted: highlight_revenue
                    .is_some_and(|target| (revenue - target).abs() < HIGHLIGHT_DISTANCE),
            })
            .collect();

        Ok(Self {
            it_percent,
            columns,
            rows,
        })
    }
}
