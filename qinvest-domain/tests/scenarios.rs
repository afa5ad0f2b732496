//! Behavioural scenarios for the investment planner.
//!
//! Three violations are shared by most scenarios:
//! - `org.A`          cost 10, profit 100
//! - `org.project.B`  cost 40, profit 80.2
//! - `C`              cost 30, profit 120.1
//!
//! Full remediation costs 80 minutes and returns 300 minutes.

use pretty_assertions::assert_eq;
use qinvest_domain::{InvestmentPlanner, PlanError, ProfitCalculator};
use qinvest_types::analysis::QualityAnalysis;
use qinvest_types::artefact::Artefact;
use qinvest_types::plan::{PlanRequest, QualityInvestmentPlan};
use qinvest_types::violation::{
    CriteriaOperator, QualityCriteria, QualityRequirement, QualityViolation,
};
use std::collections::HashMap;

fn violation(name: &str, metric: &str, cost: u64) -> QualityViolation {
    QualityViolation {
        artefact: Artefact::new(name, ""),
        requirement: QualityRequirement {
            id: None,
            name: None,
            criteria: QualityCriteria {
                metric_identifier: metric.to_string(),
                operator: CriteriaOperator::Less,
                threshold: 5.0,
            },
        },
        remediation_cost_minutes: cost,
        non_remediation_cost_minutes: 0,
        weighting_metric_value: 0.0,
        weighting_metric: "ncloc".to_string(),
        estimated_profit_minutes: None,
    }
}

/// Profit looked up by artefact name; unknown artefacts are worth nothing.
struct ProfitTable(HashMap<String, f64>);

impl ProfitTable {
    fn new(entries: &[(&str, f64)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        )
    }
}

impl ProfitCalculator for ProfitTable {
    fn calculate_profit(&self, violation: &QualityViolation) -> anyhow::Result<f64> {
        Ok(self
            .0
            .get(violation.artefact.long_name())
            .copied()
            .unwrap_or(0.0))
    }
}

fn standard_analysis() -> QualityAnalysis {
    QualityAnalysis::success(
        Some("MyProject".to_string()),
        vec![
            violation("org.A", "cc", 10),
            violation("org.project.B", "rfc", 40),
            violation("C", "cov", 30),
        ],
    )
}

fn standard_planner() -> InvestmentPlanner {
    InvestmentPlanner::new(ProfitTable::new(&[
        ("org.A", 100.0),
        ("org.project.B", 80.2),
        ("C", 120.1),
    ]))
}

fn plan(base: &str, budget: i64) -> QualityInvestmentPlan {
    standard_planner()
        .compute(&standard_analysis(), &PlanRequest::new(base, budget))
        .expect("compute plan")
}

fn names(plan: &QualityInvestmentPlan) -> Vec<&str> {
    plan.entries()
        .iter()
        .map(|e| e.artefact_long_name())
        .collect()
}

#[test]
fn zero_profit_without_violations() {
    let empty = QualityAnalysis::success(None, vec![]);
    let plan = standard_planner()
        .compute(&empty, &PlanRequest::new("", 100))
        .expect("compute plan");
    assert_eq!(plan.total_profit_minutes(), 0);
    assert_eq!(plan, QualityInvestmentPlan::empty());
}

#[test]
fn exact_budget_accepts_everything_in_profit_order() {
    let plan = plan("", 80);
    assert_eq!(names(&plan), vec!["C", "org.A", "org.project.B"]);
    assert_eq!(plan.total_investment_minutes(), 80);
    assert_eq!(plan.total_profit_minutes(), 300);
    assert_eq!(plan.roi(), 375);
}

#[test]
fn surplus_budget_is_left_unspent() {
    let plan = plan("", 100);
    assert_eq!(plan.total_investment_minutes(), 80);
    assert_eq!(plan.total_profit_minutes(), 300);
}

#[test]
fn short_budget_ends_with_one_partial_entry() {
    let plan = plan("", 35);
    assert_eq!(names(&plan), vec!["C", "org.A"]);
    assert_eq!(plan.total_investment_minutes(), 35);
    assert_eq!(plan.total_profit_minutes(), 170);

    let entries = plan.entries();
    assert!(!entries[0].is_partial());
    assert!(entries[1].is_partial());
    assert_eq!(entries[1].remediation_cost_minutes(), 5);
    assert_eq!(entries[1].profit_minutes(), 50.0);
}

#[test]
fn non_positive_profits_give_empty_plan() {
    let planner = InvestmentPlanner::new(|_: &QualityViolation| -> anyhow::Result<f64> {
        Ok(-0.1)
    });
    for budget in [0, 50, 1_000] {
        let plan = planner
            .compute(&standard_analysis(), &PlanRequest::new("", budget))
            .expect("compute plan");
        assert!(plan.entries().is_empty());
        assert_eq!(plan.total_profit_minutes(), 0);
        assert_eq!(plan.roi(), 0);
    }
}

#[test]
fn equal_profit_prefers_better_roi() {
    let analysis = QualityAnalysis::success(
        None,
        vec![violation("org.A", "cc", 50), violation("B", "rfc", 40)],
    );
    let planner = InvestmentPlanner::new(ProfitTable::new(&[("org.A", 100.0), ("B", 100.0)]));

    let plan = planner
        .compute(&analysis, &PlanRequest::new("", 50))
        .expect("compute plan");

    let entries = plan.entries();
    assert_eq!(entries[0].artefact_long_name(), "B");
    assert!(!entries[0].is_partial());
    assert_eq!(entries[0].remediation_cost_minutes(), 40);

    // The remaining 10 minutes go to the next-ranked violation.
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].artefact_long_name(), "org.A");
    assert!(entries[1].is_partial());
    assert_eq!(entries[1].remediation_cost_minutes(), 10);
    assert_eq!(plan.total_investment_minutes(), 50);
    assert_eq!(plan.total_profit_minutes(), 120);
}

#[test]
fn more_profit_wins_over_cheaper_cost() {
    let analysis = QualityAnalysis::success(
        None,
        vec![
            violation("org.A", "cc", 50),
            violation("org.project.B", "rfc", 50),
            violation("C", "cov", 10),
        ],
    );
    let planner = InvestmentPlanner::new(ProfitTable::new(&[
        ("org.A", 20.0),
        ("org.project.B", 30.0),
        ("C", 120.0),
    ]));

    let plan = planner
        .compute(&analysis, &PlanRequest::new("", 50))
        .expect("compute plan");
    assert_eq!(names(&plan), vec!["C", "org.project.B"]);
    assert!(plan.entries()[1].is_partial());
}

#[test]
fn base_package_restricts_to_subtree() {
    let plan = plan("org.project", 80);
    assert_eq!(names(&plan), vec!["org.project.B"]);
}

#[test]
fn base_package_does_not_match_string_prefix_siblings() {
    let analysis = QualityAnalysis::success(
        None,
        vec![
            violation("org.project.B", "cc", 10),
            violation("org.projectX.C", "cc", 10),
        ],
    );
    let planner =
        InvestmentPlanner::new(ProfitTable::new(&[("org.project.B", 5.0), ("org.projectX.C", 50.0)]));
    let plan = planner
        .compute(&analysis, &PlanRequest::new("org.project", 100))
        .expect("compute plan");
    assert_eq!(names(&plan), vec!["org.project.B"]);
}

#[test]
fn plan_for_one_artefact() {
    let analysis = QualityAnalysis::success(
        None,
        vec![
            violation("org.project.A", "cc", 50),
            violation("org.project.AB", "rfc", 50),
            violation("org.project.ABC", "cov", 10),
        ],
    );
    let planner = InvestmentPlanner::new(ProfitTable::new(&[
        ("org.project.A", 100.0),
        ("org.project.AB", 100.0),
        ("org.project.ABC", 100.0),
    ]));

    let plan = planner
        .compute(&analysis, &PlanRequest::new("org.project.A", 50))
        .expect("compute plan");
    assert_eq!(names(&plan), vec!["org.project.A"]);
}

#[test]
fn plan_for_one_sub_package() {
    let analysis = QualityAnalysis::success(
        None,
        vec![
            violation("org.project.a.test.A", "cc", 50),
            violation("org.project.b.B", "rfc", 50),
            violation("org.project.C", "cov", 10),
        ],
    );
    let planner = InvestmentPlanner::new(ProfitTable::new(&[
        ("org.project.a.test.A", 100.0),
        ("org.project.b.B", 100.0),
        ("org.project.C", 100.0),
    ]));

    let plan = planner
        .compute(&analysis, &PlanRequest::new("org.project.a", 50))
        .expect("compute plan");
    assert_eq!(names(&plan), vec!["org.project.a.test.A"]);
}

#[test]
fn zero_budget_gives_empty_plan() {
    let plan = plan("", 0);
    assert_eq!(plan, QualityInvestmentPlan::empty());
}

#[test]
fn negative_budget_is_invalid_argument() {
    let err = standard_planner()
        .compute(&standard_analysis(), &PlanRequest::new("", -5))
        .expect_err("negative budget");
    assert!(matches!(err, PlanError::InvalidArgument { .. }));
}

#[test]
fn collaborator_failure_aborts_whole_plan() {
    let planner = InvestmentPlanner::new(|v: &QualityViolation| -> anyhow::Result<f64> {
        match v.artefact.long_name() {
            "org.project.B" => anyhow::bail!("estimator timed out"),
            _ => Ok(10.0),
        }
    });
    let err = planner
        .compute(&standard_analysis(), &PlanRequest::new("", 80))
        .expect_err("collaborator failure");
    match err {
        PlanError::ComputationFailed { artefact, source } => {
            assert_eq!(artefact, "org.project.B");
            assert!(source.to_string().contains("timed out"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn total_profit_out_of_range_aborts_plan() {
    let planner = InvestmentPlanner::new(ProfitTable::new(&[
        ("org.A", 1e19),
        ("org.project.B", 1e19),
        ("C", 1e19),
    ]));
    let err = planner
        .compute(&standard_analysis(), &PlanRequest::new("", 80))
        .expect_err("profit overflow");

    assert_eq!(err.exit_code(), 1);
    match err {
        // Equal profit, so org.A (best ROI) comes first and C tips the sum over.
        PlanError::ComputationFailed { artefact, .. } => assert_eq!(artefact, "C"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn planner_is_shareable_across_threads() {
    let planner = std::sync::Arc::new(standard_planner());
    let handles: Vec<_> = [35_i64, 80, 100]
        .into_iter()
        .map(|budget| {
            let planner = std::sync::Arc::clone(&planner);
            std::thread::spawn(move || {
                planner
                    .compute(&standard_analysis(), &PlanRequest::new("", budget))
                    .expect("compute plan")
                    .total_investment_minutes()
            })
        })
        .collect();

    let totals: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().expect("join"))
        .collect();
    assert_eq!(totals, vec![35, 80, 80]);
}
