#![no_main]

//! Fuzz target for the filter -> rank -> allocate -> aggregate pipeline.
//!
//! Structured input drives the planner; every successful plan is checked
//! against the budget and ordering invariants.

use libfuzzer_sys::fuzz_target;
use qinvest_domain::{InvestmentPlanner, PlanError, RecordedProfit};
use qinvest_types::analysis::QualityAnalysis;
use qinvest_types::artefact::Artefact;
use qinvest_types::plan::PlanRequest;
use qinvest_types::violation::{
    CriteriaOperator, QualityCriteria, QualityRequirement, QualityViolation,
};

#[derive(Debug, arbitrary::Arbitrary)]
struct PlanInput {
    violations: Vec<ViolationInput>,
    base_package: String,
    budget_minutes: i64,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct ViolationInput {
    long_name: String,
    cost: u16,
    profit: Option<f64>,
}

fn violation(input: ViolationInput) -> QualityViolation {
    QualityViolation {
        artefact: Artefact::new(input.long_name, ""),
        requirement: QualityRequirement {
            id: None,
            name: None,
            criteria: QualityCriteria {
                metric_identifier: "cc".to_string(),
                operator: CriteriaOperator::Less,
                threshold: 5.0,
            },
        },
        remediation_cost_minutes: u64::from(input.cost),
        non_remediation_cost_minutes: 0,
        weighting_metric_value: 0.0,
        weighting_metric: String::new(),
        estimated_profit_minutes: input.profit,
    }
}

fuzz_target!(|input: PlanInput| {
    let analysis =
        QualityAnalysis::success(None, input.violations.into_iter().map(violation).collect());
    let request = PlanRequest::new(input.base_package, input.budget_minutes);

    match InvestmentPlanner::new(RecordedProfit).compute(&analysis, &request) {
        Ok(plan) => {
            let budget = request.budget_minutes as u64;
            assert!(plan.total_investment_minutes() <= budget);
            assert!(plan.entries().iter().all(|e| e.profit_minutes() > 0.0));
            let partials = plan.entries().iter().filter(|e| e.is_partial()).count();
            assert!(partials <= 1);
            if partials == 1 {
                assert!(plan.entries().last().is_some_and(|e| e.is_partial()));
            }
        }
        Err(PlanError::InvalidArgument { .. }) => assert!(request.budget_minutes < 0),
        Err(PlanError::ComputationFailed { .. }) => {}
    }
});
