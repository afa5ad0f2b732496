use crate::artefact::Artefact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison a metric value must satisfy for a requirement to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriteriaOperator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl CriteriaOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            CriteriaOperator::Less => "<",
            CriteriaOperator::LessOrEqual => "<=",
            CriteriaOperator::Greater => ">",
            CriteriaOperator::GreaterOrEqual => ">=",
            CriteriaOperator::Equal => "=",
            CriteriaOperator::NotEqual => "!=",
        }
    }
}

/// A threshold on one metric, e.g. `cc < 5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCriteria {
    pub metric_identifier: String,
    pub operator: CriteriaOperator,
    pub threshold: f64,
}

impl fmt::Display for QualityCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.metric_identifier,
            self.operator.symbol(),
            self.threshold
        )
    }
}

/// The rule a violation breaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub criteria: QualityCriteria,
}

/// One detected breach of a requirement against one artefact.
///
/// Produced upstream by the analysis run; everything here is consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityViolation {
    pub artefact: Artefact,

    pub requirement: QualityRequirement,

    /// Estimated minutes needed to fix this violation.
    pub remediation_cost_minutes: u64,

    /// Estimated minutes lost per change while the violation stays unfixed.
    #[serde(default)]
    pub non_remediation_cost_minutes: u64,

    #[serde(default)]
    pub weighting_metric_value: f64,

    /// Metric key the costs were weighted by, e.g. `ncloc`.
    #[serde(default)]
    pub weighting_metric: String,

    /// Profit estimate attached by the upstream estimator, if it ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_profit_minutes: Option<f64>,
}
