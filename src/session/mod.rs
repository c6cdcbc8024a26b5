//! Session-scoped engine state.
//!
//! A [`Session`] owns everything that changes while a user works: custom
//! benchmark entries, the calculation log and the live selection. Nothing
//! here is global; one session per user or request.

mod log;

pub use log::{CalculationLog, CalculationLogEntry};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::benchmarks::{BenchmarkCatalog, PercentRange};
use crate::budget::{self, BudgetSummary, ScenarioBounds};
use crate::core::{CalculationRequest, PercentPair};
use crate::errors::{BudgetError, Result};

pub const DEFAULT_REVENUE: f64 = 100.0;

/// The live inputs of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub category: String,
    /// Annual revenue in millions
    pub revenue: f64,
    pub percents: PercentPair,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: BenchmarkCatalog,
    log: CalculationLog,
    selection: Selection,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BenchmarkCatalog::standard())
    }
}

impl Session {
    /// Start on the catalog's default category at its typical percentages.
    pub fn new(catalog: BenchmarkCatalog) -> Self {
        let entry = catalog.default_entry();
        let selection = Selection {
            category: entry.category_name.clone(),
            revenue: DEFAULT_REVENUE,
            percents: entry.typical(),
        };
        Self {
            catalog,
            log: CalculationLog::new(),
            selection,
        }
    }

    pub fn catalog(&self) -> &BenchmarkCatalog {
        &self.catalog
    }

    pub fn log(&self) -> &CalculationLog {
        &self.log
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a category and load its typical percentages.
    pub fn select_category(&mut self, category: &str) -> Result<()> {
        let entry = self.catalog.lookup(category)?;
        self.selection.category = entry.category_name.clone();
        self.selection.percents = entry.typical();
        debug!(category = %self.selection.category, "Category selected");
        Ok(())
    }

    pub fn set_revenue(&mut self, revenue: f64) -> Result<()> {
        if !revenue.is_finite() || revenue <= 0.0 {
            return Err(BudgetError::invalid_input(format!(
                "revenue must be a positive number, got {revenue}"
            )));
        }
        self.selection.revenue = revenue;
        Ok(())
    }

    /// Override the percentages without changing the category.
    pub fn set_percents(&mut self, percents: PercentPair) -> Result<()> {
        percents.validate()?;
        self.selection.percents = percents;
        Ok(())
    }

    /// Apply every field of a request: category first, then revenue and
    /// the explicit percentages.
    pub fn apply_request(&mut self, request: &CalculationRequest) -> Result<()> {
        request.validate()?;
        self.select_category(&request.category)?;
        self.selection.revenue = request.revenue;
        self.selection.percents = request.percents();
        Ok(())
    }

    /// Add or replace a custom category in this session's catalog.
    pub fn add_custom(
        &mut self,
        name: &str,
        it: PercentRange,
        security: PercentRange,
    ) -> Result<()> {
        self.catalog.add_custom(name, it, security).map(|_| ())
    }

    /// Drop all custom categories. A selection pointing at one of them
    /// falls back to the default category.
    pub fn clear_custom(&mut self) {
        let was_custom = self.catalog.is_custom(&self.selection.category);
        self.catalog.clear_custom();
        if was_custom {
            let entry = self.catalog.default_entry();
            self.selection.category = entry.category_name.clone();
            self.selection.percents = entry.typical();
        }
    }

    /// Append the live percentages to the log.
    pub fn record_current(&mut self) -> CalculationLogEntry {
        let percents = self.selection.percents;
        self.push_log(percents)
    }

    /// Append a previously saved pair without touching the selection.
    pub fn record(&mut self, percents: PercentPair) -> Result<CalculationLogEntry> {
        percents.validate()?;
        Ok(self.push_log(percents))
    }

    fn push_log(&mut self, percents: PercentPair) -> CalculationLogEntry {
        self.log
            .append(percents.it_percent, percents.security_percent);
        debug!(entries = self.log.len(), "Calculation recorded");
        CalculationLogEntry::from(percents)
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Bounds of the selected category.
    pub fn bounds(&self) -> Result<ScenarioBounds> {
        self.catalog
            .lookup(&self.selection.category)
            .map(budget::scenario_bounds)
    }

    pub fn summary(&self, with_bounds: bool) -> Result<BudgetSummary> {
        let bounds = if with_bounds {
            Some(self.bounds()?)
        } else {
            None
        };
        Ok(budget::summarize(
            self.selection.revenue,
            self.selection.percents,
            bounds.as_ref(),
        ))
    }
}
