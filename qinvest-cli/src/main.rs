mod config;
mod validate;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use qinvest_core::adapters::{FsAnalysisSource, FsWritePort};
use qinvest_core::pipeline::{run_plan, write_plan_artifacts, PlanOutcome, ToolError};
use qinvest_core::settings::PlanSettings;
use qinvest_core::{InvestmentPlanner, RecordedProfit};
use qinvest_types::artifact::ToolInfo;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "qinvest",
    version,
    about = "Plans which quality violations to fix within a time budget."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a quality investment plan from an analysis.
    Plan(PlanArgs),
    /// Validate an analysis file against the bundled JSON schema.
    Validate(ValidateArgs),
    /// List schema identifiers understood by qinvest.
    ListSchemas(ListSchemasArgs),
}

#[derive(Debug, Parser)]
struct PlanArgs {
    /// Project root (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Analysis file (default: <root>/artifacts/analysis.json).
    #[arg(long)]
    analysis: Option<Utf8PathBuf>,

    /// Output directory for plan artifacts (default: <root>/artifacts/qinvest).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Only plan violations of this package or artefact and its sub-packages.
    #[arg(long)]
    base_package: Option<String>,

    /// Remediation budget in minutes.
    #[arg(long, allow_negative_numbers = true)]
    budget: Option<i64>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct ValidateArgs {
    /// Project root (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Analysis file (default: <root>/artifacts/analysis.json).
    #[arg(long)]
    analysis: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListSchemasArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        let code = e
            .downcast_ref::<ToolError>()
            .map(ToolError::exit_code)
            .unwrap_or(1);
        return ExitCode::from(code);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Validate(args) => cmd_validate(args),
        Command::ListSchemas(args) => cmd_list_schemas(args),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let root = args.root;

    // Load config file and merge with CLI arguments
    let file_config = config::load_or_default(&root).context("load qinvest.toml config")?;
    let merged =
        ConfigMerger::new(file_config).merge_plan_args(args.base_package.as_deref(), args.budget);
    debug!(
        "merged config: base_package={:?}, budget_minutes={:?}, source_extension={}",
        merged.base_package, merged.budget_minutes, merged.source_extension
    );

    let Some(budget_minutes) = merged.budget_minutes else {
        return Err(ToolError::InvalidInput(
            "no budget given; pass --budget or set plan.budget_minutes in qinvest.toml".to_string(),
        )
        .into());
    };

    let mut settings = PlanSettings::for_root(root);
    if let Some(analysis) = args.analysis {
        settings.analysis_path = analysis;
    }
    if let Some(out_dir) = args.out_dir {
        settings.out_dir = out_dir;
    }
    settings.base_package = merged.base_package;
    settings.budget_minutes = budget_minutes;
    settings.source_extension = merged.source_extension;

    let source = FsAnalysisSource::new(settings.analysis_path.clone());
    let planner = InvestmentPlanner::new(RecordedProfit);
    let outcome = run_plan(&settings, &source, &planner, tool_info())?;

    write_plan_artifacts(&outcome, &settings.out_dir, &FsWritePort)
        .with_context(|| format!("write plan artifacts to {}", settings.out_dir))?;
    info!("wrote plan to {}", settings.out_dir);

    match args.format {
        OutputFormat::Text => print_plan_summary(&outcome),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.artifact)?);
        }
    }
    Ok(())
}

fn print_plan_summary(outcome: &PlanOutcome) {
    let plan = &outcome.artifact.plan;
    println!(
        "plan {}: {} entries, investment {} min, profit {} min, ROI {}%",
        outcome.artifact.plan_id,
        plan.entries().len(),
        plan.total_investment_minutes(),
        plan.total_profit_minutes(),
        plan.roi()
    );
    if plan.is_empty() {
        println!("  no entries planned");
        return;
    }
    println!(
        "  {:>3}  {:<40} {:>10} {:>12} {:>8}",
        "#", "ARTEFACT", "COST", "PROFIT", "ROI"
    );
    for (i, entry) in plan.entries().iter().enumerate() {
        let name = if entry.is_partial() {
            format!("{} (partial)", entry.artefact_long_name())
        } else {
            entry.artefact_long_name().to_string()
        };
        println!(
            "  {:>3}  {:<40} {:>10} {:>12.1} {:>8.2}",
            i + 1,
            name,
            entry.remediation_cost_minutes(),
            entry.profit_minutes(),
            entry.roi()
        );
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let path = args
        .analysis
        .unwrap_or_else(|| args.root.join("artifacts").join("analysis.json"));

    let errors = validate::validate_analysis_file(&path)?;
    if errors.is_empty() {
        println!("{}: valid {}", path, qinvest_types::schema::QINVEST_ANALYSIS_V1);
        return Ok(());
    }

    for e in &errors {
        println!("{}: {}", path, e);
    }
    Err(ToolError::InvalidInput(format!(
        "{} failed schema validation with {} error(s)",
        path,
        errors.len()
    ))
    .into())
}

fn cmd_list_schemas(args: ListSchemasArgs) -> anyhow::Result<()> {
    let ids = [
        qinvest_types::schema::QINVEST_ANALYSIS_V1,
        qinvest_types::schema::QINVEST_PLAN_V1,
    ];
    match args.format {
        OutputFormat::Text => {
            for id in ids {
                let bundled = validate::known_schemas().iter().any(|(known, _)| *known == id);
                let note = if bundled { "  (validate)" } else { "" };
                println!("{}{}", id, note);
            }
        }
        OutputFormat::Json => {
            let schemas: Vec<_> = ids
                .iter()
                .map(|id| {
                    serde_json::json!({
                        "id": id,
                        "validate": validate::known_schemas().iter().any(|(known, _)| known == id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
    }
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "qinvest".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
