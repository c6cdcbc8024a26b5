use anyhow::Result;
use tracing::info;

use super::open_session;
use crate::config::BudgetConfig;
use crate::io::{BudgetReport, Report};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetCommand {
    pub revenue: Option<f64>,
    pub category: Option<String>,
    pub it: Option<f64>,
    pub security: Option<f64>,
    pub bounds: bool,
}

pub fn run_budget(command: BudgetCommand, config: &BudgetConfig) -> Result<Report> {
    let mut session = open_session(
        config,
        command.category.as_deref(),
        command.it,
        command.security,
    )?;
    session.set_revenue(command.revenue.unwrap_or(config.default_revenue()))?;

    let summary = session.summary(command.bounds)?;
    info!(
        category = %session.selection().category,
        security_budget = summary.result.security_budget,
        "Budget computed"
    );
    Ok(Report::Budget(BudgetReport {
        category: session.selection().category.clone(),
        summary,
    }))
}
