//! Comparative scenario data for charts and tables.
//!
//! Produces plain numeric series; rendering is left to the consumer.

mod palette;
mod points;
mod series;
mod table;

pub use palette::Palette;
pub use points::{
    revenue_points, validate_max_revenue, validate_revenue_points, MAX_CHART_REVENUE,
    REFERENCE_REVENUE,
};
pub use series::{
    bar_security_percentages, build, ScenarioSeriesBuilder, Series, SeriesBundle, SeriesKind,
    BAR_MAX_PERCENT, BAR_MIN_PERCENT, BAR_OFFSETS,
};
pub use table::{BudgetColumn, BudgetTable, BudgetTableRow, STANDARD_SECURITY_PERCENTAGES};
