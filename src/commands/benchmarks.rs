use anyhow::{Context, Result};

use crate::config::BudgetConfig;
use crate::io::Report;

pub fn run_benchmarks(config: &BudgetConfig) -> Result<Report> {
    let catalog = config
        .build_catalog()
        .context("Invalid custom categories in configuration")?;
    Ok(Report::Benchmarks {
        entries: catalog.comparison(),
    })
}
