//! CLI command implementations.
//!
//! Each command turns its arguments plus the loaded [`BudgetConfig`] into a
//! [`Report`]; [`write_report`] renders it in the requested format.
//!
//! Available commands:
//! - **budget**: single-organization IT and security budget
//! - **scenario**: comparison series and budget table over a revenue range
//! - **tam**: market sizing over a business population
//! - **benchmarks**: benchmark category listing
//! - **init**: write a starter `.secbudget.toml`

pub mod benchmarks;
pub mod budget;
pub mod init;
pub mod scenario;
pub mod tam;

pub use benchmarks::run_benchmarks;
pub use budget::{run_budget, BudgetCommand};
pub use init::init_config;
pub use scenario::{run_scenario, ScenarioCommand};
pub use tam::{run_tam, TamCommand};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{load_config, load_config_from_path_result, BudgetConfig};
use crate::core::PercentPair;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::Report;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Explicit path is strict; otherwise search parent directories leniently.
pub fn resolve_config(path: Option<&Path>) -> Result<BudgetConfig> {
    match path {
        Some(path) => load_config_from_path_result(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// CLI flag first, then the configured default, then terminal.
pub fn resolve_format(flag: Option<OutputFormat>, config: &BudgetConfig) -> OutputFormat {
    flag.or_else(|| config.default_format().and_then(|f| f.parse().ok()))
        .unwrap_or_default()
}

pub fn write_report(report: &Report, options: &OutputOptions) -> Result<()> {
    let mut buffer = Vec::new();
    create_writer(options.format, Box::new(&mut buffer)).write_report(report)?;

    match &options.output {
        Some(path) => crate::io::write_file(path, &String::from_utf8_lossy(&buffer))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Session on `category` (or the configured default) with optional
/// percentage overrides applied on top of its typical values.
pub(crate) fn open_session(
    config: &BudgetConfig,
    category: Option<&str>,
    it: Option<f64>,
    security: Option<f64>,
) -> Result<Session> {
    let catalog = config
        .build_catalog()
        .context("Invalid custom categories in configuration")?;
    let mut session = Session::new(catalog);
    session.select_category(category.unwrap_or(config.default_category()))?;

    if it.is_some() || security.is_some() {
        let current = session.selection().percents;
        session.set_percents(PercentPair::new(
            it.unwrap_or(current.it_percent),
            security.unwrap_or(current.security_percent),
        ))?;
    }
    Ok(session)
}
