//! Core plan pipeline, extracted from the CLI.
//!
//! The entry points are I/O-agnostic: the analysis is read and artifacts are
//! written through the port traits.

use crate::ports::{AnalysisSource, WritePort};
use crate::settings::PlanSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::Utc;
use qinvest_domain::{InvestmentPlanner, PlanError};
use qinvest_render::render_plan_md;
use qinvest_types::artifact::{PlanArtifact, PlanInput, RunInfo, ToolInfo};
use qinvest_types::plan::PlanRequest;
use tracing::debug;
use uuid::Uuid;

/// Error type for pipeline results. Exit code 2 = invalid input, 1 = tool error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolError::InvalidInput(_) => 2,
            ToolError::Internal(_) => 1,
        }
    }
}

impl From<PlanError> for ToolError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidArgument { message } => ToolError::InvalidInput(message),
            other => ToolError::Internal(anyhow::Error::new(other)),
        }
    }
}

/// Outcome of `run_plan`.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub artifact: PlanArtifact,
    pub plan_md: String,
}

/// Run the plan pipeline: load the analysis, compute the plan, render markdown.
///
/// The caller is responsible for writing artifacts to disk (via `WritePort`)
/// or the convenience `write_plan_artifacts` helper.
pub fn run_plan(
    settings: &PlanSettings,
    source: &dyn AnalysisSource,
    planner: &InvestmentPlanner,
    tool: ToolInfo,
) -> Result<PlanOutcome, ToolError> {
    let started_at = Utc::now();

    let loaded = source.load_analysis()?;
    let request = PlanRequest::new(settings.base_package.clone(), settings.budget_minutes);

    let plan = planner.compute(&loaded.analysis, &request)?;

    let plan_id = deterministic_plan_id(&loaded.sha256, &request);
    debug!(plan_id = %plan_id, input = %loaded.path, "plan computed");

    let input = PlanInput {
        path: display_path(&loaded.path, &settings.root),
        sha256: loaded.sha256,
        project: loaded.analysis.project.clone(),
        violations_total: loaded.analysis.violations.len() as u64,
    };

    let mut artifact = PlanArtifact::new(plan_id, tool, input, request, plan);
    artifact.run = RunInfo {
        started_at: Some(started_at),
        ended_at: Some(Utc::now()),
    };

    let plan_md = render_plan_md(&artifact, &settings.source_extension);

    Ok(PlanOutcome { artifact, plan_md })
}

/// Write `plan.json` and `plan.md` to the output directory.
pub fn write_plan_artifacts(
    outcome: &PlanOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let plan_json = serde_json::to_string_pretty(&outcome.artifact).context("serialize plan")?;
    writer.write_file(&out_dir.join("plan.json"), plan_json.as_bytes())?;

    writer.write_file(&out_dir.join("plan.md"), outcome.plan_md.as_bytes())?;

    Ok(())
}

fn deterministic_plan_id(input_sha256: &str, request: &PlanRequest) -> Uuid {
    // Deterministic ID: v5(namespace, input digest + request)
    const NAMESPACE: Uuid = Uuid::from_bytes([
        0x7a, 0x1e, 0x52, 0x0c, 0x93, 0x4f, 0x4d, 0x2b, 0xa6, 0x1d, 0x3c, 0x85, 0xe0, 0x47, 0x19,
        0x6e,
    ]);

    let stable_key = format!(
        "{}|{}|{}",
        input_sha256, request.base_package, request.budget_minutes
    );
    Uuid::new_v5(&NAMESPACE, stable_key.as_bytes())
}

/// Paths inside the root are recorded relative to it, with forward slashes.
fn display_path(path: &Utf8Path, root: &Utf8Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    shown.as_str().replace('\\', "/")
}
