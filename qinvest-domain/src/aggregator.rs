use crate::error::{PlanError, PlanResult};
use qinvest_types::plan::{QualityInvestmentPlan, QualityInvestmentPlanEntry};

/// Folds accepted entries into a plan with whole-minute totals and a whole-percent ROI.
///
/// Fails with [`PlanError::ComputationFailed`], naming the entry that tipped the sum over, when
/// the summed profit no longer fits a whole-minute `u64`. The ROI percentage saturates at
/// `u64::MAX`.
pub fn aggregate(entries: Vec<QualityInvestmentPlanEntry>) -> PlanResult<QualityInvestmentPlan> {
    if entries.is_empty() {
        return Ok(QualityInvestmentPlan::empty());
    }

    // Accepted costs never exceed the u64 budget, so this sum cannot overflow.
    let total_investment: u64 = entries.iter().map(|e| e.remediation_cost_minutes()).sum();

    let mut profit_sum = 0.0_f64;
    for entry in &entries {
        profit_sum += entry.profit_minutes();
        // Also rejects NaN and infinity.
        if !(profit_sum < u64::MAX as f64) {
            return Err(PlanError::ComputationFailed {
                artefact: entry.artefact_long_name().to_string(),
                source: anyhow::anyhow!(
                    "total profit {} exceeds the representable range of whole minutes",
                    profit_sum
                ),
            });
        }
    }
    let total_profit = profit_sum.max(0.0).floor() as u64;

    let roi = if total_investment > 0 {
        (total_profit as f64 / total_investment as f64 * 100.0).round() as u64
    } else {
        0
    };

    Ok(QualityInvestmentPlan::new(
        entries,
        total_investment,
        total_profit,
        roi,
    ))
}
