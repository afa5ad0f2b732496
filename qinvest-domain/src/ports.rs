use anyhow::Context;
use qinvest_types::violation::QualityViolation;

/// Values a violation: how many minutes fixing it gives back.
///
/// A non-positive result is legitimate and means "not worth fixing". Errors abort the plan.
/// Implementations must be cheap, synchronous lookups; remote estimators should batch-fetch
/// before handing results to the planner.
pub trait ProfitCalculator: Send + Sync {
    fn calculate_profit(&self, violation: &QualityViolation) -> anyhow::Result<f64>;
}

impl<F> ProfitCalculator for F
where
    F: Fn(&QualityViolation) -> anyhow::Result<f64> + Send + Sync,
{
    fn calculate_profit(&self, violation: &QualityViolation) -> anyhow::Result<f64> {
        self(violation)
    }
}

/// Reads the profit the upstream estimator already attached to each violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedProfit;

impl ProfitCalculator for RecordedProfit {
    fn calculate_profit(&self, violation: &QualityViolation) -> anyhow::Result<f64> {
        violation.estimated_profit_minutes.with_context(|| {
            format!(
                "no estimated_profit_minutes recorded for {}",
                violation.artefact.long_name()
            )
        })
    }
}
