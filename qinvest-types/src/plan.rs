use serde::{Deserialize, Serialize};

/// What the caller asked for: which subtree, and how many minutes to spend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Dotted package or class name; empty means "whole project".
    #[serde(default)]
    pub base_package: String,

    /// Signed so that a negative budget can be reported instead of wrapping.
    pub budget_minutes: i64,
}

impl PlanRequest {
    pub fn new(base_package: impl Into<String>, budget_minutes: i64) -> Self {
        Self {
            base_package: base_package.into(),
            budget_minutes,
        }
    }
}

/// One accepted remediation in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityInvestmentPlanEntry {
    artefact_long_name: String,
    remediation_cost_minutes: u64,
    profit_minutes: f64,
    roi: f64,

    /// True for the final entry when the budget ran out mid-violation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    partial: bool,
}

impl QualityInvestmentPlanEntry {
    pub fn new(
        artefact_long_name: impl Into<String>,
        remediation_cost_minutes: u64,
        profit_minutes: f64,
        partial: bool,
    ) -> Self {
        let roi = if remediation_cost_minutes > 0 {
            profit_minutes / remediation_cost_minutes as f64
        } else {
            0.0
        };
        Self {
            artefact_long_name: artefact_long_name.into(),
            remediation_cost_minutes,
            profit_minutes,
            roi,
            partial,
        }
    }

    pub fn artefact_long_name(&self) -> &str {
        &self.artefact_long_name
    }

    pub fn remediation_cost_minutes(&self) -> u64 {
        self.remediation_cost_minutes
    }

    pub fn profit_minutes(&self) -> f64 {
        self.profit_minutes
    }

    pub fn roi(&self) -> f64 {
        self.roi
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

/// A ranked remediation list with summary totals.
///
/// Entries are in acceptance order, highest priority first. Totals are whole minutes; `roi` is a
/// whole percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityInvestmentPlan {
    #[serde(default)]
    entries: Vec<QualityInvestmentPlanEntry>,
    total_investment_minutes: u64,
    total_profit_minutes: u64,
    roi: u64,
}

impl QualityInvestmentPlan {
    pub fn new(
        entries: Vec<QualityInvestmentPlanEntry>,
        total_investment_minutes: u64,
        total_profit_minutes: u64,
        roi: u64,
    ) -> Self {
        Self {
            entries,
            total_investment_minutes,
            total_profit_minutes,
            roi,
        }
    }

    /// The plan for "nothing worth doing": no entries, all totals zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[QualityInvestmentPlanEntry] {
        &self.entries
    }

    pub fn total_investment_minutes(&self) -> u64 {
        self.total_investment_minutes
    }

    pub fn total_profit_minutes(&self) -> u64 {
        self.total_profit_minutes
    }

    pub fn roi(&self) -> u64 {
        self.roi
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
