//! Tabular views of a [`Report`], shared by the Markdown and terminal writers.

use super::report::{BudgetReport, Report, ScenarioReport, TamOutput};
use crate::benchmarks::BenchmarkComparison;
use crate::scenario::BudgetTable;
use crate::tam::ScalingOutcome;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub notes: Vec<String>,
}

impl Section {
    fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }
}

pub fn report_title(report: &Report) -> &'static str {
    match report {
        Report::Budget(_) => "Security Budget",
        Report::Scenario(_) => "Security Budget Scenarios",
        Report::Tam(_) => "Total Addressable Market",
        Report::Benchmarks { .. } => "Industry Benchmarks",
    }
}

pub fn sections(report: &Report) -> Vec<Section> {
    match report {
        Report::Budget(budget) => vec![budget_section(budget)],
        Report::Scenario(scenario) => scenario_sections(scenario),
        Report::Tam(tam) => tam_sections(tam),
        Report::Benchmarks { entries } => vec![benchmark_section(entries)],
    }
}

/// `$12.34M`, or `$1.23B` from a thousand millions up.
pub fn money(millions: f64) -> String {
    if millions.abs() >= 1000.0 {
        format!("${:.2}B", millions / 1000.0)
    } else {
        format!("${millions:.2}M")
    }
}

pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn budget_section(report: &BudgetReport) -> Section {
    let summary = &report.summary;
    let result = &summary.result;
    let mut section = Section::new("Budget", &["Metric", "Value"]);
    let mut row = |metric: &str, value: String| section.rows.push(vec![metric.to_string(), value]);

    row("Category", report.category.clone());
    row("Annual Revenue", money(result.revenue));
    row(
        "IT Budget",
        format!("{} ({}% of revenue)", money(result.it_budget), result.it_percent),
    );
    row(
        "Security Budget",
        format!(
            "{} ({}% of IT)",
            money(result.security_budget),
            result.security_percent
        ),
    );
    row(
        "Effective Security Rate",
        format!("{:.2}% of revenue", summary.effective_security_rate),
    );
    if let Some(range) = &summary.range {
        row(
            "Industry Range",
            format!(
                "{} - {}",
                money(range.lower.security_budget),
                money(range.upper.security_budget)
            ),
        );
    }
    section
}

fn scenario_sections(report: &ScenarioReport) -> Vec<Section> {
    let mut headers = vec!["Series".to_string()];
    headers.extend(report.bundle.revenue_points.iter().map(|r| money(*r)));

    let mut series = Section {
        title: "Security Budget by Annual Revenue".to_string(),
        headers,
        rows: Vec::new(),
        notes: vec![format!(
            "IT Budget: {}% of Revenue | Security Budget: {}% of IT Budget",
            report.selected.it_percent, report.selected.security_percent
        )],
    };
    for s in report.bundle.series() {
        let marker = if s.emphasis { " *" } else { "" };
        let mut row = vec![format!("{}{marker}", s.label)];
        row.extend(s.security_budgets().map(money));
        series.rows.push(row);
    }
    series
        .notes
        .push("* current selection, drawn on top".to_string());

    let mut sections = vec![series];
    if let Some(table) = &report.table {
        sections.push(budget_table_section(table));
    }
    sections
}

fn budget_table_section(table: &BudgetTable) -> Section {
    let mut headers = vec!["Annual Revenue".to_string(), "IT Budget".to_string()];
    headers.extend(table.columns.iter().map(|c| c.label.clone()));

    let mut section = Section {
        title: "Budget Breakdown Table".to_string(),
        headers,
        rows: Vec::new(),
        notes: vec![format!(
            "Security budgets at each revenue point with {}% IT budget; saved calculations use their own IT percentage.",
            table.it_percent
        )],
    };
    for row in &table.rows {
        let marker = if row.highlighted { " *" } else { "" };
        let mut cells = vec![format!("{}{marker}", money(row.revenue)), money(row.it_budget)];
        cells.extend(row.security_budgets.iter().map(|v| money(*v)));
        section.rows.push(cells);
    }
    if table.rows.iter().any(|r| r.highlighted) {
        section
            .notes
            .push("* near the selected annual revenue".to_string());
    }
    section
}

fn tam_sections(output: &TamOutput) -> Vec<Section> {
    let report = &output.report;
    let mut by_class = Section::new(
        "TAM by Classification",
        &[
            "Classification",
            "Benchmark",
            "Entities",
            "Uncoded",
            "Revenue Estimate",
            "IT TAM",
            "Security TAM",
        ],
    );
    for result in &report.classifications {
        by_class.rows.push(vec![
            result.classification.clone(),
            result.category.clone(),
            count(result.total_entities),
            count(result.uncoded_entities),
            money(result.total_revenue_estimate),
            money(result.it_budget_tam),
            money(result.security_budget_tam),
        ]);
    }
    let totals = &report.totals;
    by_class.rows.push(vec![
        "Total".to_string(),
        String::new(),
        count(totals.total_entities),
        count(totals.uncoded_entities),
        money(totals.total_revenue_estimate),
        money(totals.it_budget_tam),
        money(totals.security_budget_tam),
    ]);
    by_class.notes.push(format!("Population: {}", output.source));
    by_class.notes.push(
        "Uncoded entities are counted but carry no revenue estimate.".to_string(),
    );
    match report.scaling {
        ScalingOutcome::NotRequested => {}
        ScalingOutcome::Applied {
            target,
            factor,
            unscaled_security_tam,
        } => by_class.notes.push(format!(
            "Security TAM normalized to {} (factor {factor:.4}, unscaled {}).",
            money(target),
            money(unscaled_security_tam)
        )),
        ScalingOutcome::Skipped { target } => by_class.notes.push(format!(
            "Scaling to {} skipped: aggregate security TAM is zero.",
            money(target)
        )),
    }

    let mut sections = vec![by_class];
    if output.by_tier {
        let mut by_tier = Section::new(
            "TAM by Revenue Tier",
            &[
                "Revenue Tier",
                "Entities",
                "Share",
                "Representative Revenue",
                "Revenue Estimate",
                "IT TAM",
                "Security TAM",
            ],
        );
        for (tier, share) in report.tiers.iter().zip(&output.distribution) {
            by_tier.rows.push(vec![
                tier.label.clone(),
                count(tier.entity_count),
                format!("{:.2}%", share.percentage),
                money(tier.representative_revenue),
                money(tier.revenue_estimate),
                money(tier.it_budget_tam),
                money(tier.security_budget_tam),
            ]);
        }
        by_tier
            .notes
            .push("Share is of coded entities only.".to_string());
        sections.push(by_tier);
    }
    sections
}

fn benchmark_section(entries: &[BenchmarkComparison]) -> Section {
    let mut section = Section::new(
        "Benchmarks",
        &[
            "Category",
            "IT % of Revenue (min / typical / max)",
            "Security % of IT (min / typical / max)",
            "Effective Security % of Revenue",
        ],
    );
    for entry in entries {
        let name = if entry.custom {
            format!("{} (custom)", entry.category)
        } else {
            entry.category.clone()
        };
        section.rows.push(vec![
            name,
            format!("{} / {} / {}", entry.it.min, entry.it.typical, entry.it.max),
            format!(
                "{} / {} / {}",
                entry.security.min, entry.security.typical, entry.security.max
            ),
            format!("{:.2}%", entry.effective_security_rate),
        ]);
    }
    section
}
