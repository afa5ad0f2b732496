use crate::violation::QualityViolation;
use serde::{Deserialize, Serialize};

/// The result of one quality analysis run over a project.
///
/// qinvest reads these *tolerantly*: unknown fields are ignored and optional fields may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAnalysis {
    /// Schema identifier, e.g. "qinvest.analysis.v1".
    #[serde(default = "default_schema")]
    pub schema: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default)]
    pub status: AnalysisStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default)]
    pub violations: Vec<QualityViolation>,
}

fn default_schema() -> String {
    crate::schema::QINVEST_ANALYSIS_V1.to_string()
}

impl QualityAnalysis {
    pub fn success(project: Option<String>, violations: Vec<QualityViolation>) -> Self {
        Self {
            schema: default_schema(),
            project,
            status: AnalysisStatus::Succeeded,
            failure_reason: None,
            violations,
        }
    }

    pub fn failed(project: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            schema: default_schema(),
            project,
            status: AnalysisStatus::Failed,
            failure_reason: Some(reason.into()),
            violations: vec![],
        }
    }

    pub fn is_successful(&self) -> bool {
        self.status == AnalysisStatus::Succeeded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Succeeded,
    Failed,
}
