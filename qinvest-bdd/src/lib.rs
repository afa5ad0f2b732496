//! BDD harness (cucumber-rs).
//!
//! This crate keeps scenario tests isolated from the production crates. The
//! helpers here build analysis documents the way an upstream analysis run would.

use qinvest_types::schema::QINVEST_ANALYSIS_V1;
use serde_json::{json, Value};

/// One violation with a recorded profit estimate.
pub fn violation_json(long_name: &str, cost_minutes: u64, profit_minutes: f64) -> Value {
    let short_name = long_name.rsplit('.').next().unwrap_or(long_name);
    json!({
        "artefact": { "long_name": long_name, "short_name": short_name },
        "requirement": {
            "criteria": { "metric_identifier": "cc", "operator": "<", "threshold": 5.0 }
        },
        "remediation_cost_minutes": cost_minutes,
        "estimated_profit_minutes": profit_minutes
    })
}

/// A succeeded analysis over `violations`.
pub fn analysis_json(project: &str, violations: Vec<Value>) -> Value {
    json!({
        "schema": QINVEST_ANALYSIS_V1,
        "project": project,
        "status": "succeeded",
        "violations": violations
    })
}

/// A failed analysis run.
pub fn failed_analysis_json(project: &str, reason: &str) -> Value {
    json!({
        "schema": QINVEST_ANALYSIS_V1,
        "project": project,
        "status": "failed",
        "failure_reason": reason
    })
}
