use crate::error::{PlanError, PlanResult};
use crate::ports::ProfitCalculator;
use qinvest_types::artefact::Artefact;
use qinvest_types::violation::QualityViolation;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// A violation that is worth fixing, with the numbers the allocator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub artefact: Artefact,
    pub remediation_cost_minutes: u64,
    pub profit_minutes: f64,
    pub roi: f64,
}

/// Values every violation, drops the ones not worth fixing, and sorts the rest by priority.
///
/// All profit lookups complete before sorting. Any collaborator failure aborts the run.
pub fn rank<'a, I>(violations: I, profit: &dyn ProfitCalculator) -> PlanResult<Vec<RankedCandidate>>
where
    I: IntoIterator<Item = &'a QualityViolation>,
{
    let mut candidates = Vec::new();

    for violation in violations {
        let name = violation.artefact.long_name();
        let value = profit
            .calculate_profit(violation)
            .map_err(|source| PlanError::ComputationFailed {
                artefact: name.to_string(),
                source,
            })?;

        if !value.is_finite() {
            return Err(PlanError::ComputationFailed {
                artefact: name.to_string(),
                source: anyhow::anyhow!("profit estimate is not a finite number: {}", value),
            });
        }

        if value <= 0.0 {
            debug!(artefact = %name, profit = value, "dropping violation without profit");
            continue;
        }

        let cost = violation.remediation_cost_minutes;
        if cost == 0 {
            warn!(
                artefact = %name,
                requirement = %violation.requirement.criteria,
                "excluding violation with zero remediation cost"
            );
            continue;
        }

        candidates.push(RankedCandidate {
            artefact: violation.artefact.clone(),
            remediation_cost_minutes: cost,
            profit_minutes: value,
            roi: value / cost as f64,
        });
    }

    candidates.sort_by(compare_candidates);
    Ok(candidates)
}

/// Priority order: profit desc, then roi desc, then long name asc.
pub fn compare_candidates(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.profit_minutes
        .total_cmp(&a.profit_minutes)
        .then_with(|| b.roi.total_cmp(&a.roi))
        .then_with(|| a.artefact.long_name().cmp(b.artefact.long_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qinvest_types::violation::{CriteriaOperator, QualityCriteria, QualityRequirement};
    use std::collections::HashMap;

    fn violation(name: &str, cost: u64) -> QualityViolation {
        QualityViolation {
            artefact: Artefact::new(name, ""),
            requirement: QualityRequirement {
                id: None,
                name: None,
                criteria: QualityCriteria {
                    metric_identifier: "cc".to_string(),
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

    fn profits(table: &[(&str, f64)]) -> impl ProfitCalculator {
        let map: HashMap<String, f64> = table
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        move |v: &QualityViolation| -> anyhow::Result<f64> {
            Ok(map.get(v.artefact.long_name()).copied().unwrap_or(0.0))
        }
    }

    fn names(c: &[RankedCandidate]) -> Vec<&str> {
        c.iter().map(|c| c.artefact.long_name()).collect()
    }

    #[test]
    fn sorts_by_profit_descending() {
        let vs = vec![violation("org.A", 10), violation("B", 40), violation("C", 30)];
        let p = profits(&[("org.A", 100.0), ("B", 80.0), ("C", 120.0)]);
        let ranked = rank(&vs, &p).expect("rank");
        assert_eq!(names(&ranked), vec!["C", "org.A", "B"]);
        assert_eq!(ranked[0].roi, 4.0);
    }

    #[test]
    fn equal_profit_prefers_higher_roi() {
        let vs = vec![violation("org.A", 50), violation("B", 40)];
        let p = profits(&[("org.A", 100.0), ("B", 100.0)]);
        let ranked = rank(&vs, &p).expect("rank");
        assert_eq!(names(&ranked), vec!["B", "org.A"]);
    }

    #[test]
    fn full_tie_breaks_on_name() {
        let vs = vec![violation("z.Z", 10), violation("a.A", 10), violation("m.M", 10)];
        let p = profits(&[("z.Z", 10.0), ("a.A", 10.0), ("m.M", 10.0)]);
        let ranked = rank(&vs, &p).expect("rank");
        assert_eq!(names(&ranked), vec!["a.A", "m.M", "z.Z"]);
    }

    #[test]
    fn drops_non_positive_profit() {
        let vs = vec![violation("A", 10), violation("B", 10), violation("C", 10)];
        let p = profits(&[("A", 0.0), ("B", -0.1), ("C", 1.0)]);
        let ranked = rank(&vs, &p).expect("rank");
        assert_eq!(names(&ranked), vec!["C"]);
    }

    #[test]
    fn drops_zero_cost() {
        let vs = vec![violation("A", 0), violation("B", 5)];
        let p = profits(&[("A", 50.0), ("B", 1.0)]);
        let ranked = rank(&vs, &p).expect("rank");
        assert_eq!(names(&ranked), vec!["B"]);
    }

    #[test]
    fn collaborator_failure_aborts() {
        let vs = vec![violation("A", 10), violation("B", 10)];
        let failing = |v: &QualityViolation| -> anyhow::Result<f64> {
            if v.artefact.long_name() == "B" {
                anyhow::bail!("estimator unavailable")
            }
            Ok(1.0)
        };
        let err = rank(&vs, &failing).expect_err("should fail");
        match err {
            PlanError::ComputationFailed { artefact, .. } => assert_eq!(artefact, "B"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_profit_aborts() {
        let vs = vec![violation("A", 10)];
        let nan = |_: &QualityViolation| -> anyhow::Result<f64> { Ok(f64::NAN) };
        assert!(matches!(
            rank(&vs, &nan),
            Err(PlanError::ComputationFailed { .. })
        ));
    }
}
