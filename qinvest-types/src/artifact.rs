use crate::plan::{PlanRequest, QualityInvestmentPlan};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The `plan.json` envelope: a plan plus everything needed to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanArtifact {
    pub schema: String,

    /// Deterministic for equal (input, request) pairs.
    pub plan_id: Uuid,

    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    pub input: PlanInput,

    pub request: PlanRequest,

    pub plan: QualityInvestmentPlan,
}

impl PlanArtifact {
    pub fn new(
        plan_id: Uuid,
        tool: ToolInfo,
        input: PlanInput,
        request: PlanRequest,
        plan: QualityInvestmentPlan,
    ) -> Self {
        Self {
            schema: crate::schema::QINVEST_PLAN_V1.to_string(),
            plan_id,
            tool,
            run: RunInfo::default(),
            input,
            request,
            plan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Where the analysis came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInput {
    pub path: String,

    /// Hex sha256 of the raw analysis bytes.
    pub sha256: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Violations in the analysis before filtering.
    #[serde(default)]
    pub violations_total: u64,
}
