use anyhow::Result;
use secbudget::cli::{self, Commands};
use secbudget::commands::{self, BudgetCommand, OutputOptions, ScenarioCommand, TamCommand};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();
    secbudget::observability::init_tracing(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        return commands::init_config(force);
    }

    let config = commands::resolve_config(cli.config.as_deref())?;
    let options = OutputOptions {
        format: commands::resolve_format(cli.format.map(Into::into), &config),
        output: cli.output,
    };

    let report = match cli.command {
        Commands::Budget {
            revenue,
            category,
            it,
            security,
            bounds,
        } => commands::run_budget(
            BudgetCommand {
                revenue,
                category,
                it,
                security,
                bounds,
            },
            &config,
        )?,
        Commands::Scenario {
            category,
            it,
            security,
            revenue,
            max_revenue,
            no_bounds,
            custom,
            saved,
            table,
        } => commands::run_scenario(
            ScenarioCommand {
                category,
                it,
                security,
                revenue,
                max_revenue,
                no_bounds,
                custom,
                saved,
                table,
            },
            &config,
        )?,
        Commands::Tam {
            population,
            synthesize,
            classifications,
            scale_to,
            no_scale,
            by_tier,
        } => commands::run_tam(
            TamCommand {
                population,
                synthesize,
                classifications,
                scale_to,
                no_scale,
                by_tier,
            },
            &config,
        )?,
        Commands::Benchmarks => commands::run_benchmarks(&config)?,
        Commands::Init { .. } => return Ok(()),
    };

    commands::write_report(&report, &options)
}
