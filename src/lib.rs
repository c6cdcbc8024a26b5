// Export modules for library usage
pub mod benchmarks;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod population;
pub mod scenario;
pub mod session;
pub mod tam;

// Re-export commonly used types
pub use crate::core::{BudgetResult, CalculationRequest, CustomTrend, PercentPair};

pub use crate::errors::{BudgetError, Result};

pub use crate::benchmarks::{
    BenchmarkCatalog, BenchmarkEntry, ClassificationMapping, PercentRange, StandardCategory,
};

pub use crate::budget::{compute, scenario_bounds, summarize, BudgetSummary, ScenarioBounds};

pub use crate::population::{
    PopulationFile, PopulationRow, PopulationTable, TierBounds, TierBucket, TierPartition,
};

pub use crate::tam::{
    aggregate, ScalingOutcome, TamAggregator, TamReport, TamResult, TamTotals, TierTamResult,
};

pub use crate::scenario::{
    revenue_points, BudgetTable, Palette, ScenarioSeriesBuilder, Series, SeriesBundle, SeriesKind,
};

pub use crate::session::{CalculationLog, CalculationLogEntry, Selection, Session};

pub use crate::config::BudgetConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
