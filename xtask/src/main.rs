use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

const FIXTURES_DIR: &str = "tests/fixtures";

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by qinvest.
    PrintSchemas,
    /// Create an artifacts layout with an empty, succeeded analysis.json.
    InitAnalysis {
        #[arg(long, default_value = "artifacts")]
        dir: String,
        /// Overwrite an existing analysis.json.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures {
        /// Only bless this fixture (directory name under tests/fixtures).
        #[arg(long)]
        fixture: Option<String>,
    },
    /// Validate analysis files against the bundled schema.
    ///
    /// Without --analysis, every golden fixture's analysis.json is checked.
    Validate {
        /// Analysis file to validate; repeatable.
        #[arg(long)]
        analysis: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", qinvest_types::schema::QINVEST_ANALYSIS_V1);
            println!("{}", qinvest_types::schema::QINVEST_PLAN_V1);
        }
        Command::InitAnalysis { dir, force } => {
            fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
            let path = format!("{dir}/analysis.json");
            if std::path::Path::new(&path).exists() && !force {
                anyhow::bail!("{path} already exists (use --force to overwrite)");
            }
            let analysis = serde_json::json!({
                "schema": qinvest_types::schema::QINVEST_ANALYSIS_V1,
                "status": "succeeded",
                "violations": []
            });
            fs::write(&path, serde_json::to_string_pretty(&analysis)? + "\n")?;
            println!("initialized {path}");
        }
        Command::BlessFixtures { fixture } => {
            let status = ProcessCommand::new("cargo")
                .args(bless_args(fixture.as_deref()))
                .env("QINVEST_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
        Command::Validate { analysis } => {
            let paths = if analysis.is_empty() {
                fixture_analyses(Path::new(FIXTURES_DIR))?
            } else {
                analysis
            };
            if paths.is_empty() {
                anyhow::bail!("no analysis files found under {FIXTURES_DIR}");
            }

            let mut failed = Vec::new();
            for path in &paths {
                let status = ProcessCommand::new("cargo")
                    .args(validate_args(path))
                    .status()
                    .with_context(|| format!("run qinvest validate on {}", path.display()))?;
                if !status.success() {
                    failed.push(path.display().to_string());
                }
            }
            if !failed.is_empty() {
                anyhow::bail!("schema validation failed for: {}", failed.join(", "));
            }
            println!("validated {} analysis file(s)", paths.len());
        }
    }
    Ok(())
}

/// Golden tests are named `golden_<fixture>` with dashes mapped to underscores.
fn bless_args(fixture: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = ["test", "-p", "qinvest-domain", "--test", "golden_fixtures"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(name) = fixture {
        args.push("--".to_string());
        args.push(format!("golden_{}", name.replace('-', "_")));
    }
    args
}

fn validate_args(analysis: &Path) -> Vec<String> {
    vec![
        "run".to_string(),
        "-q".to_string(),
        "-p".to_string(),
        "qinvest".to_string(),
        "--".to_string(),
        "validate".to_string(),
        "--analysis".to_string(),
        analysis.display().to_string(),
    ]
}

/// `<fixtures>/<name>/analysis.json` for every fixture directory, sorted by name.
fn fixture_analyses(fixtures: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(fixtures)? {
        let candidate = entry?.path().join("analysis.json");
        if candidate.is_file() {
            paths.push(candidate);
        }
    }
    paths.sort();
    Ok(paths)
}
