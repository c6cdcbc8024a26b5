//! `.secbudget.toml` configuration.
//!
//! Every section is optional; accessors on [`BudgetConfig`] return the
//! built-in defaults for anything left out.

mod core;
mod loader;
pub mod validation;

pub use core::{
    BudgetConfig, ChartConfig, CustomCategoryConfig, DefaultsConfig, OutputConfig, TamConfig,
    DEFAULT_MAX_CHART_REVENUE,
};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path_result,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validate_config_result, ConfigIssue};
