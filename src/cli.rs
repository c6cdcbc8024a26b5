use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{CustomTrend, PercentPair};

#[derive(Parser, Debug)]
#[command(name = "secbudget")]
#[command(
    about = "IT and security budget estimator with NAICS-based market sizing",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the nearest .secbudget.toml)
    #[arg(long, global = true, env = "SECBUDGET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate IT and security budgets for one organization
    Budget {
        /// Annual revenue in millions (defaults to the configured revenue)
        #[arg(long)]
        revenue: Option<f64>,

        /// Benchmark category supplying typical percentages
        #[arg(long)]
        category: Option<String>,

        /// IT budget as a percentage of revenue (overrides the category)
        #[arg(long)]
        it: Option<f64>,

        /// Security budget as a percentage of IT budget (overrides the category)
        #[arg(long)]
        security: Option<f64>,

        /// Also show the category's lower and upper bound budgets
        #[arg(long)]
        bounds: bool,
    },

    /// Build comparison series over a range of revenues
    Scenario {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        it: Option<f64>,

        #[arg(long)]
        security: Option<f64>,

        /// Revenue to highlight in the budget table
        #[arg(long)]
        revenue: Option<f64>,

        /// Largest revenue on the chart axis, in millions
        #[arg(long)]
        max_revenue: Option<f64>,

        /// Omit the lower/typical/upper benchmark lines
        #[arg(long)]
        no_bounds: bool,

        /// Custom trend line as IT:SECURITY[:LABEL]
        #[arg(long, value_parser = parse_custom_trend)]
        custom: Option<CustomTrend>,

        /// Saved calculation as IT:SECURITY (repeatable)
        #[arg(long = "saved", value_parser = parse_percent_pair)]
        saved: Vec<PercentPair>,

        /// Include the budget breakdown table
        #[arg(long)]
        table: bool,
    },

    /// Aggregate IT and security TAM over a business population
    Tam {
        /// Population file (JSON or TOML rows); defaults to national NAICS counts
        #[arg(long, conflicts_with = "synthesize")]
        population: Option<PathBuf>,

        /// Spread national tier counts across NAICS sectors
        #[arg(long, value_enum)]
        synthesize: Option<SynthesisMode>,

        /// Restrict to a classification (NAICS code, name or label); repeatable
        #[arg(long = "classification", value_name = "NAME|CODE")]
        classifications: Vec<String>,

        /// Normalize the security TAM to this total, in millions
        #[arg(long, conflicts_with = "no_scale")]
        scale_to: Option<f64>,

        /// Ignore the configured scaling target
        #[arg(long)]
        no_scale: bool,

        /// Add the per-tier breakdown
        #[arg(long)]
        by_tier: bool,
    },

    /// List benchmark categories with their percentage ranges
    Benchmarks,

    /// Initialize a .secbudget.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SynthesisMode {
    /// Split every national tier count evenly across sectors
    EvenSplit,
    /// Spread each sector's entity total with the national tier shape
    SectorTotals,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

/// `"5.5:9.5"` into a percentage pair.
pub fn parse_percent_pair(value: &str) -> Result<PercentPair, String> {
    let (it, security) = value
        .split_once(':')
        .ok_or_else(|| format!("expected IT:SECURITY, got '{value}'"))?;
    let pair = PercentPair::new(parse_number(it)?, parse_number(security)?);
    pair.validate().map_err(|e| e.to_string())?;
    Ok(pair)
}

/// `"5:12:My Trend"`; the label defaults to "My Trend".
pub fn parse_custom_trend(value: &str) -> Result<CustomTrend, String> {
    let mut parts = value.splitn(3, ':');
    let (Some(it), Some(security)) = (parts.next(), parts.next()) else {
        return Err(format!("expected IT:SECURITY[:LABEL], got '{value}'"));
    };
    let pair = parse_percent_pair(&format!("{it}:{security}"))?;
    let label = parts
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("My Trend");
    Ok(CustomTrend::new(label, pair))
}

fn parse_number(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", text.trim()))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
