use crate::model::kpi::{KpiRecord, Operator, RawKpi};
use crate::model::thresholds::UnknownOperatorPolicy;

pub fn clamp100(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}

/// Score of a single validated KPI, in [0, 100].
///
/// A zero target is defined as 100% achieved regardless of operator or
/// achieved amount; `greaterThan` scores proportionally and saturates at
/// the target; `lessThan` gives full marks up to the target and penalizes
/// overshoot proportionally; an unrecognized operator scores 0.
pub fn kpi_score(kpi: &KpiRecord) -> f64 {
    let raw = if kpi.target == 0.0 {
        100.0
    } else {
        match kpi.operator {
            Operator::GreaterThan => (kpi.achieved / kpi.target * 100.0).min(100.0),
            Operator::LessThan => {
                if kpi.achieved <= kpi.target {
                    100.0
                } else {
                    (100.0 - (kpi.achieved - kpi.target) / kpi.target * 100.0).max(0.0)
                }
            }
            Operator::Unknown => 0.0,
        }
    };
    clamp100(raw)
}

/// Rounded mean of per-KPI scores; 0 when there is nothing to average.
pub fn mean_score(scores: &[f64]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: f64 = scores.iter().sum();
    (sum / scores.len() as f64).round() as u32
}

/// Task score over raw KPI entries with the reference policy: entries with
/// a non-numeric target or achieved amount are skipped, entries with an
/// unrecognized operator count toward the denominator and score 0.
///
/// Never fails: malformed entries degrade to skips and an empty or
/// all-invalid list yields 0.
pub fn calculate_task_score(kpis: &[RawKpi]) -> u32 {
    calculate_task_score_with(kpis, UnknownOperatorPolicy::ScoreZero)
}

pub fn calculate_task_score_with(kpis: &[RawKpi], policy: UnknownOperatorPolicy) -> u32 {
    let scores = kpis
        .iter()
        .filter_map(|raw| KpiRecord::from_raw(raw).ok())
        .filter(|rec| {
            policy == UnknownOperatorPolicy::ScoreZero || rec.operator != Operator::Unknown
        })
        .map(|rec| kpi_score(&rec))
        .collect::<Vec<_>>();
    mean_score(&scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scoring.rs"]
mod tests;
