use serde::{Deserialize, Serialize};
use tracing::debug;

use super::palette::Palette;
use super::points::validate_revenue_points;
use crate::budget::{self, ScenarioBounds};
use crate::core::{BudgetResult, CustomTrend, PercentPair};
use crate::errors::Result;
use crate::session::CalculationLogEntry;

/// Offsets of the comparison bars from the selected security percentage.
pub const BAR_OFFSETS: [f64; 4] = [-6.0, -3.0, 0.0, 3.0];
pub const BAR_MIN_PERCENT: f64 = 1.0;
pub const BAR_MAX_PERCENT: f64 = 25.0;

const SELECTED_BAR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    ComparisonBar,
    LowerBound,
    Typical,
    UpperBound,
    CustomTrend,
    SavedCalculation,
    CurrentSelection,
}

/// One chart series: a percentage pair evaluated at every revenue point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub kind: SeriesKind,
    pub label: String,
    pub color: String,
    pub percents: PercentPair,
    /// Drawn above everything else
    pub emphasis: bool,
    /// The bar at exactly the selected percentage. Neighbours clamped onto
    /// the same percentage are not marked; no bar is marked when the selected
    /// percentage lies outside the bar range.
    pub selected: bool,
    pub points: Vec<BudgetResult>,
}

impl Series {
    pub fn security_budgets(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.security_budget)
    }
}

/// Everything a renderer needs for the comparison chart.
///
/// `lines` is in draw order: bounds, custom trend, saved calculations, and
/// the current selection last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBundle {
    pub revenue_points: Vec<f64>,
    pub bars: Vec<Series>,
    pub lines: Vec<Series>,
}

impl SeriesBundle {
    pub fn current_selection(&self) -> Option<&Series> {
        self.lines
            .last()
            .filter(|s| s.kind == SeriesKind::CurrentSelection)
    }

    pub fn find(&self, kind: SeriesKind) -> Option<&Series> {
        self.series().find(|s| s.kind == kind)
    }

    /// Bars first, then lines.
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.bars.iter().chain(self.lines.iter())
    }
}

/// Security percentages of the four comparison bars, each clamped to
/// `[1, 25]`.
pub fn bar_security_percentages(selected_security: f64) -> [f64; 4] {
    BAR_OFFSETS.map(|offset| (selected_security + offset).clamp(BAR_MIN_PERCENT, BAR_MAX_PERCENT))
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioSeriesBuilder {
    palette: Palette,
}

impl ScenarioSeriesBuilder {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn build(
        &self,
        revenue_points: &[f64],
        selected: PercentPair,
        bounds: Option<&ScenarioBounds>,
        custom: Option<&CustomTrend>,
        log: &[CalculationLogEntry],
    ) -> Result<SeriesBundle> {
        validate_revenue_points(revenue_points)?;
        let palette = &self.palette;
        let line = |kind, label: String, color: &str, percents| {
            series(revenue_points, kind, label, color, percents)
        };

        let bars = bar_security_percentages(selected.security_percent)
            .iter()
            .zip(&palette.bars)
            .enumerate()
            .map(|(index, (security, color))| {
                let selected_bar =
                    index == SELECTED_BAR && *security == selected.security_percent;
                let suffix = if selected_bar { " (Selected)" } else { "" };
                let label = format!(
                    "{security}% of IT Budget ({}% IT){suffix}",
                    selected.it_percent
                );
                let percents = PercentPair::new(selected.it_percent, *security);
                let mut bar = line(SeriesKind::ComparisonBar, label, color, percents);
                bar.selected = selected_bar;
                bar
            })
            .collect();

        let mut lines = Vec::with_capacity(5 + log.len());
        if let Some(bounds) = bounds {
            lines.push(line(
                SeriesKind::LowerBound,
                format!("Lower Bound ({})", bounds.lower),
                &palette.lower_bound,
                bounds.lower,
            ));
            lines.push(line(
                SeriesKind::Typical,
                format!("Typical ({})", bounds.typical),
                &palette.typical,
                bounds.typical,
            ));
            lines.push(line(
                SeriesKind::UpperBound,
                format!("Upper Bound ({})", bounds.upper),
                &palette.upper_bound,
                bounds.upper,
            ));
        }
        if let Some(custom) = custom {
            lines.push(line(
                SeriesKind::CustomTrend,
                format!("{} ({})", custom.label, custom.percents),
                &palette.custom_trend,
                custom.percents,
            ));
        }
        for (index, entry) in log.iter().enumerate() {
            let percents = entry.percents();
            lines.push(line(
                SeriesKind::SavedCalculation,
                format!("User Calc #{} ({percents})", index + 1),
                palette.user_calculation(index),
                percents,
            ));
        }
        let mut current = line(
            SeriesKind::CurrentSelection,
            format!("User Selection ({selected})"),
            &palette.user_selection,
            selected,
        );
        current.emphasis = true;
        lines.push(current);

        debug!(
            points = revenue_points.len(),
            lines = lines.len(),
            saved = log.len(),
            "Scenario series built"
        );
        Ok(SeriesBundle {
            revenue_points: revenue_points.to_vec(),
            bars,
            lines,
        })
    }
}

fn series(
    revenue_points: &[f64],
    kind: SeriesKind,
    label: String,
    color: &str,
    percents: PercentPair,
) -> Series {
    Series {
        kind,
        label,
        color: color.to_string(),
        percents,
        emphasis: false,
        selected: false,
        points: revenue_points
            .iter()
            .map(|revenue| budget::compute_pair(*revenue, percents))
            .collect(),
    }
}

/// Build with the default palette.
pub fn build(
    revenue_points: &[f64],
    selected: PercentPair,
    bounds: Option<&ScenarioBounds>,
    custom: Option<&CustomTrend>,
    log: &[CalculationLogEntry],
) -> Result<SeriesBundle> {
    ScenarioSeriesBuilder::default().build(revenue_points, selected, bounds, custom, log)
}
