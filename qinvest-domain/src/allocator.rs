use crate::ranker::RankedCandidate;
use qinvest_types::plan::QualityInvestmentPlanEntry;
use tracing::debug;

/// Spends `budget_minutes` on `candidates` in rank order.
///
/// Candidates that fit are accepted whole. The first one that doesn't fit gets whatever budget is
/// left, with its profit scaled by the same fraction, and allocation stops there. Later, cheaper
/// candidates are never pulled forward.
pub fn allocate(
    candidates: &[RankedCandidate],
    budget_minutes: u64,
) -> Vec<QualityInvestmentPlanEntry> {
    let mut entries = Vec::new();
    let mut remaining = budget_minutes;

    for candidate in candidates {
        if remaining == 0 {
            break;
        }

        let cost = candidate.remediation_cost_minutes;
        let name = candidate.artefact.long_name();

        if cost <= remaining {
            entries.push(QualityInvestmentPlanEntry::new(
                name,
                cost,
                candidate.profit_minutes,
                false,
            ));
            remaining -= cost;
            continue;
        }

        debug!(
            artefact = %name,
            cost,
            spent = remaining,
            "budget exhausted, accepting partial remediation"
        );
        // remaining < cost, so the fraction is below 1 and scaling never overflows.
        let partial_profit = candidate.profit_minutes * (remaining as f64 / cost as f64);
        // Scaling a subnormal profit can underflow to zero.
        if partial_profit > 0.0 {
            entries.push(QualityInvestmentPlanEntry::new(
                name,
                remaining,
                partial_profit,
                true,
            ));
        }
        break;
    }

    entries
}
