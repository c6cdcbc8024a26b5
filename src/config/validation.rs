//! Configuration validation with error accumulation.
//!
//! Every check runs and every problem is reported, so a user can fix the
//! whole file in one pass instead of one error per run.

use std::fmt;
use std::path::Path;

use super::core::BudgetConfig;
use crate::benchmarks::BenchmarkCatalog;
use crate::errors::{BudgetError, Result};
use crate::population::TierPartition;
use crate::scenario::validate_max_revenue;

/// One problem in a configuration file, with the field it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the entire config, collecting all issues.
pub fn validate_config(config: &BudgetConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    issues.extend(validate_defaults(config));
    issues.extend(validate_tam(config));
    issues.extend(validate_chart(config));
    issues.extend(validate_custom_categories(config));
    issues.extend(validate_output(config));
    issues
}

/// `Ok` when the config is clean, otherwise a single `Config` error
/// listing every issue.
pub fn validate_config_result(config: &BudgetConfig, path: Option<&Path>) -> Result<()> {
    let issues = validate_config(config);
    if issues.is_empty() {
        return Ok(());
    }
    let message = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(match path {
        Some(path) => BudgetError::config_with_path(message, path),
        None => BudgetError::config(message),
    })
}

fn validate_defaults(config: &BudgetConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let Some(defaults) = &config.defaults else {
        return issues;
    };
    if !defaults.revenue.is_finite() || defaults.revenue <= 0.0 {
        issues.push(ConfigIssue::new(
            "defaults.revenue",
            format!("must be a positive number, got {}", defaults.revenue),
        ));
    }
    // custom categories may supply the default, so check against the full catalog
    if let Ok(catalog) = config.build_catalog() {
        if catalog.lookup(&defaults.category).is_err() {
            issues.push(ConfigIssue::new(
                "defaults.category",
                format!("unknown benchmark category '{}'", defaults.category),
            ));
        }
    }
    issues
}

fn validate_tam(config: &BudgetConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let Some(tam) = &config.tam else {
        return issues;
    };
    if let Some(target) = tam.scaling_target {
        if !target.is_finite() || target < 0.0 {
            issues.push(ConfigIssue::new(
                "tam.scaling_target",
                format!("must be a non-negative number, got {target}"),
            ));
        }
    }
    let representative = tam.open_tier_representative;
    if !representative.is_finite() || representative <= 0.0 {
        issues.push(ConfigIssue::new(
            "tam.open_tier_representative",
            format!("must be a positive number, got {representative}"),
        ));
    } else if let Err(e) = TierPartition::naics().with_open_representative(representative) {
        issues.push(ConfigIssue::new("tam.open_tier_representative", e.to_string()));
    }
    issues
}

fn validate_chart(config: &BudgetConfig) -> Vec<ConfigIssue> {
    config
        .chart
        .as_ref()
        .and_then(|chart| validate_max_revenue(chart.max_revenue).err())
        .map(|e| vec![ConfigIssue::new("chart.max_revenue", e.to_string())])
        .unwrap_or_default()
}

fn validate_custom_categories(config: &BudgetConfig) -> Vec<ConfigIssue> {
    let mut catalog = BenchmarkCatalog::standard();
    config
        .custom_categories
        .iter()
        .enumerate()
        .filter_map(|(index, custom)| {
            catalog
                .add_custom(&custom.name, custom.it, custom.security)
                .err()
                .map(|e| ConfigIssue::new(format!("custom_categories[{index}]"), e.to_string()))
        })
        .collect()
}

fn validate_output(config: &BudgetConfig) -> Vec<ConfigIssue> {
    match config.default_format() {
        Some(format) if format.parse::<crate::io::output::OutputFormat>().is_err() => {
            vec![ConfigIssue::new(
                "output.default_format",
                format!("unknown format '{format}', expected terminal, json or markdown"),
            )]
        }
        _ => Vec::new(),
    }
}
