use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::benchmarks::ClassificationFilter;
use crate::cli::SynthesisMode;
use crate::config::BudgetConfig;
use crate::io::{Report, TamOutput};
use crate::population::naics::{
    national_population, NAICS_SECTORS, NATIONAL_TIER_COUNTS, UNCODED_RECORDS,
};
use crate::population::synthesis::{synthesize_even_split, synthesize_from_sector_totals};
use crate::population::{PopulationFile, PopulationTable, TierPartition};
use crate::tam::TamAggregator;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TamCommand {
    pub population: Option<PathBuf>,
    pub synthesize: Option<SynthesisMode>,
    /// Empty keeps every classification
    pub classifications: Vec<String>,
    pub scale_to: Option<f64>,
    pub no_scale: bool,
    pub by_tier: bool,
}

pub fn run_tam(command: TamCommand, config: &BudgetConfig) -> Result<Report> {
    let catalog = config
        .build_catalog()
        .context("Invalid custom categories in configuration")?;
    let partition = config.tier_partition()?;

    let (population, source) = match (&command.population, command.synthesize) {
        (Some(path), _) => (load_population(path)?, path.display().to_string()),
        (None, Some(mode)) => synthesize(&partition, mode)?,
        (None, None) => (
            national_population(),
            "national NAICS counts".to_string(),
        ),
    };

    let filter = ClassificationFilter::new(&command.classifications);
    let (population, source) = if filter.is_empty() {
        (population, source)
    } else {
        let filtered = filter
            .apply(&population)
            .with_context(|| format!("Invalid classification filter for {source}"))?;
        let labels = filter.labels().collect::<Vec<_>>().join(", ");
        (filtered, format!("{source} ({labels})"))
    };

    let target = if command.no_scale {
        None
    } else {
        command.scale_to.or(config.scaling_target())
    };

    let report = TamAggregator::new(partition.clone())
        .aggregate(&catalog, &population, target)
        .with_context(|| format!("TAM aggregation failed for {source}"))?;
    let distribution = population.tier_distribution(&partition)?;

    info!(
        source = %source,
        rows = population.len(),
        security_tam = report.totals.security_budget_tam,
        "TAM report ready"
    );
    Ok(Report::Tam(TamOutput {
        source,
        report,
        distribution,
        by_tier: command.by_tier,
    }))
}

/// JSON unless the file ends in `.toml`.
fn load_population(path: &Path) -> Result<PopulationTable> {
    let contents = crate::io::read_file(path)
        .with_context(|| format!("Failed to read population file {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let file = if is_toml {
        PopulationFile::from_toml(&contents)?
    } else {
        PopulationFile::from_json(&contents)?
    };
    Ok(file.into_table()?)
}

fn synthesize(partition: &TierPartition, mode: SynthesisMode) -> Result<(PopulationTable, String)> {
    let table = match mode {
        SynthesisMode::EvenSplit => synthesize_even_split(
            partition,
            &NATIONAL_TIER_COUNTS,
            UNCODED_RECORDS,
            NAICS_SECTORS,
        )?,
        SynthesisMode::SectorTotals => {
            synthesize_from_sector_totals(partition, &NATIONAL_TIER_COUNTS, NAICS_SECTORS)?
        }
    };
    let source = match mode {
        SynthesisMode::EvenSplit => "national counts split evenly across NAICS sectors",
        SynthesisMode::SectorTotals => "NAICS sector totals with the national tier shape",
    };
    Ok((table, source.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TamConfig;
    use crate::tam::ScalingOutcome;
    use std::fs;
    use tempfile::TempDir;

    fn run(command: TamCommand, config: &BudgetConfig) -> TamOutput {
        match run_tam(command, config).unwrap() {
            Report::Tam(output) => output,
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn national_population_by_default() {
        let output = run(TamCommand::default(), &BudgetConfig::default());
        assert_eq!(output.report.classifications.len(), 1);
        assert_eq!(output.report.totals.uncoded_entities, UNCODED_RECORDS);
        assert_eq!(output.report.scaling, ScalingOutcome::NotRequested);
        assert_eq!(output.distribution.len(), 9);
    }

    #[test]
    fn configured_target_applies_unless_disabled() {
        let config = BudgetConfig {
            tam: Some(TamConfig {
                scaling_target: Some(180_000.0),
                ..TamConfig::default()
            }),
            ..BudgetConfig::default()
        };
        let scaled = run(TamCommand::default(), &config);
        assert!((scaled.report.totals.security_budget_tam - 180_000.0).abs() < 1e-6);

        let unscaled = run(
            TamCommand {
                no_scale: true,
                ..TamCommand::default()
            },
            &config,
        );
        assert_eq!(unscaled.report.scaling, ScalingOutcome::NotRequested);
    }

    #[test]
    fn synthesized_sectors_resolve_to_their_benchmarks() {
        let output = run(
            TamCommand {
                synthesize: Some(SynthesisMode::SectorTotals),
                ..TamCommand::default()
            },
            &BudgetConfig::default(),
        );
        assert_eq!(output.report.classifications.len(), NAICS_SECTORS.len());
        let finance = output
            .report
            .classifications
            .iter()
            .find(|r| r.classification == "Finance and Insurance")
            .unwrap();
        assert_eq!(finance.category, "Financial Services");
    }

    #[test]
    fn loads_population_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.toml");
        fs::write(
            &path,
            "[[rows]]\nclassification = \"Retail Trade\"\nlow = 0.0\nhigh = 0.5\ncount = 100\n",
        )
        .unwrap();
        let output = run(
            TamCommand {
                population: Some(path),
                ..TamCommand::default()
            },
            &BudgetConfig::default(),
        );
        let row = &output.report.classifications[0];
        assert_eq!(row.category, "Retail");
        assert!((row.total_revenue_estimate - 25.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_tier_in_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(
            &path,
            r#"{ "rows": [ { "classification": "Retail Trade", "low": 0.0, "high": 3.0, "count": 1 } ] }"#,
        )
        .unwrap();
        let result = run_tam(
            TamCommand {
                population: Some(path),
                ..TamCommand::default()
            },
            &BudgetConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn classification_filter_limits_report_to_requested_rows() {
        let output = run(
            TamCommand {
                synthesize: Some(SynthesisMode::SectorTotals),
                classifications: vec!["52".to_string(), "retail trade".to_string()],
                no_scale: true,
                ..TamCommand::default()
            },
            &BudgetConfig::default(),
        );
        let rows = &output.report.classifications;
        let mut names: Vec<_> = rows.iter().map(|r| r.classification.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Finance and Insurance", "Retail Trade"]);

        let totals = &output.report.totals;
        let entities: u64 = rows.iter().map(|r| r.total_entities).sum();
        let revenue: f64 = rows.iter().map(|r| r.total_revenue_estimate).sum();
        let security: f64 = rows.iter().map(|r| r.security_budget_tam).sum();
        assert_eq!(totals.total_entities, entities);
        assert!((totals.total_revenue_estimate - revenue).abs() < 1e-6 * revenue.max(1.0));
        assert!((totals.security_budget_tam - security).abs() < 1e-6 * security.max(1.0));

        let counted: u64 = output.distribution.iter().map(|share| share.entity_count).sum();
        assert_eq!(counted, rows.iter().map(|r| r.coded_entities).sum::<u64>());
        assert!(output.source.ends_with("(52, retail trade)"));
    }

    #[test]
    fn all_classifications_match_unfiltered_report() {
        let command = TamCommand {
            synthesize: Some(SynthesisMode::EvenSplit),
            ..TamCommand::default()
        };
        let all = run(
            TamCommand {
                classifications: vec!["All".to_string()],
                ..command.clone()
            },
            &BudgetConfig::default(),
        );
        let unfiltered = run(command, &BudgetConfig::default());
        assert_eq!(all.report, unfiltered.report);
    }

    #[test]
    fn classification_without_rows_fails() {
        let result = run_tam(
            TamCommand {
                classifications: vec!["Retail Trade".to_string()],
                ..TamCommand::default()
            },
            &BudgetConfig::default(),
        );
        assert!(result.is_err());
    }
}
