use crate::aggregator::aggregate;
use crate::allocator::allocate;
use crate::error::{PlanError, PlanResult};
use crate::filter::ArtefactFilter;
use crate::ports::ProfitCalculator;
use crate::ranker::rank;
use qinvest_types::analysis::QualityAnalysis;
use qinvest_types::plan::{PlanRequest, QualityInvestmentPlan};
use tracing::{debug, info};

/// Computes quality investment plans against one profit collaborator.
///
/// Holds no per-run state, so a single planner can serve concurrent requests.
pub struct InvestmentPlanner {
    profit: Box<dyn ProfitCalculator>,
}

impl InvestmentPlanner {
    pub fn new(profit: impl ProfitCalculator + 'static) -> Self {
        Self {
            profit: Box::new(profit),
        }
    }

    pub fn with_boxed(profit: Box<dyn ProfitCalculator>) -> Self {
        Self { profit }
    }

    /// Filter, rank, allocate and aggregate one analysis under one budget.
    pub fn compute(
        &self,
        analysis: &QualityAnalysis,
        request: &PlanRequest,
    ) -> PlanResult<QualityInvestmentPlan> {
        let budget = u64::try_from(request.budget_minutes).map_err(|_| {
            PlanError::invalid_argument(format!(
                "budget must not be negative, got {} minutes",
                request.budget_minutes
            ))
        })?;

        if !analysis.is_successful() {
            return Err(PlanError::invalid_argument(format!(
                "analysis did not succeed: {}",
                analysis
                    .failure_reason
                    .as_deref()
                    .unwrap_or("no reason recorded")
            )));
        }

        let filter = ArtefactFilter::new(request.base_package.as_str());
        let in_scope = analysis
            .violations
            .iter()
            .filter(|v| filter.includes(&v.artefact));

        let candidates = rank(in_scope, self.profit.as_ref())?;
        debug!(
            violations = analysis.violations.len(),
            candidates = candidates.len(),
            base_package = %filter.base_package(),
            "ranked candidates"
        );

        let entries = allocate(&candidates, budget);
        let plan = aggregate(entries)?;

        info!(
            entries = plan.entries().len(),
            investment = plan.total_investment_minutes(),
            profit = plan.total_profit_minutes(),
            roi = plan.roi(),
            "computed quality investment plan"
        );
        Ok(plan)
    }
}
