use anyhow::{Context, Result};

use super::open_session;
use crate::config::BudgetConfig;
use crate::core::{CustomTrend, PercentPair};
use crate::io::{Report, ScenarioReport};
use crate::scenario::{revenue_points, BudgetTable, ScenarioSeriesBuilder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioCommand {
    pub category: Option<String>,
    pub it: Option<f64>,
    pub security: Option<f64>,
    pub revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    pub no_bounds: bool,
    pub custom: Option<CustomTrend>,
    pub saved: Vec<PercentPair>,
    pub table: bool,
}

pub fn run_scenario(command: ScenarioCommand, config: &BudgetConfig) -> Result<Report> {
    let mut session = open_session(
        config,
        command.category.as_deref(),
        command.it,
        command.security,
    )?;
    session.set_revenue(command.revenue.unwrap_or(config.default_revenue()))?;
    for saved in command.saved {
        session.record(saved).context("Invalid saved calculation")?;
    }

    let max_revenue = command.max_revenue.unwrap_or(config.max_chart_revenue());
    let points = revenue_points(max_revenue).context("Invalid maximum chart revenue")?;
    let bounds = if command.no_bounds {
        None
    } else {
        Some(session.bounds()?)
    };
    let selection = session.selection();
    let log = session.log().as_list();

    let bundle = ScenarioSeriesBuilder::new(config.palette()).build(
        &points,
        selection.percents,
        bounds.as_ref(),
        command.custom.as_ref(),
        log,
    )?;
    let table = if command.table {
        Some(BudgetTable::build(
            &points,
            selection.percents,
            log,
            Some(selection.revenue),
        )?)
    } else {
        None
    };

    Ok(Report::Scenario(ScenarioReport {
        category: selection.category.clone(),
        revenue: selection.revenue,
        selected: selection.percents,
        bundle,
        table,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::SeriesKind;

    fn run(command: ScenarioCommand) -> ScenarioReport {
        match run_scenario(command, &BudgetConfig::default()).unwrap() {
            Report::Scenario(report) => report,
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn default_scenario_has_bounds_and_selection() {
        let report = run(ScenarioCommand::default());
        assert_eq!(report.bundle.revenue_points[0], 50.0);
        assert_eq!(report.bundle.lines.len(), 4);
        assert_eq!(
            report.bundle.lines.last().map(|s| s.kind),
            Some(SeriesKind::CurrentSelection)
        );
        assert!(report.table.is_none());
    }

    #[test]
    fn saved_calculations_and_table() {
        let report = run(ScenarioCommand {
            no_bounds: true,
            saved: vec![PercentPair::new(4.0, 8.0)],
            table: true,
            max_revenue: Some(150.0),
            ..ScenarioCommand::default()
        });
        assert_eq!(report.bundle.revenue_points, vec![50.0, 150.0]);
        assert_eq!(report.bundle.lines.len(), 2);
        let table = report.table.unwrap();
        assert_eq!(table.rows.len(), 2);
        // four standard columns, user 9.5%, one saved calculation
        assert_eq!(table.columns.len(), 6);
    }

    #[test]
    fn rejects_unbounded_chart_domain() {
        for max_revenue in [f64::NAN, f64::INFINITY, 2.0e7, 10.0] {
            let result = run_scenario(
                ScenarioCommand {
                    max_revenue: Some(max_revenue),
                    ..ScenarioCommand::default()
                },
                &BudgetConfig::default(),
            );
            assert!(result.is_err(), "max revenue {max_revenue} was accepted");
        }
    }
}
