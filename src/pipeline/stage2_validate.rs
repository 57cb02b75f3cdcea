use crate::input::TaskInput;
use crate::model::kpi::{InvalidReason, KpiRecord, Operator};
use crate::model::thresholds::{ScoringProfile, UnknownOperatorPolicy};

/// Validation audit for one task's KPI list. Counts are over raw entries;
/// `unknown_operator` counts entries whose numeric fields were valid but
/// whose operator was unrecognized, whether or not the policy kept them.
#[derive(Debug, Clone, Default)]
pub struct KpiAudit {
    pub n_raw: usize,
    pub n_valid: usize,
    pub n_invalid: usize,
    pub missing_target: usize,
    pub missing_achieved: usize,
    pub unknown_operator: usize,
    pub zero_target: usize,
}

#[derive(Debug, Clone)]
pub struct ValidatedTask {
    pub records: Vec<KpiRecord>,
    pub audit: KpiAudit,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub tasks: Vec<ValidatedTask>,
}

pub fn run_stage2(tasks: &[TaskInput], profile: &ScoringProfile) -> Stage2Output {
    let mut out = Vec::with_capacity(tasks.len());
    for task in tasks {
        out.push(validate_task(task, profile));
    }
    Stage2Output { tasks: out }
}

fn validate_task(task: &TaskInput, profile: &ScoringProfile) -> ValidatedTask {
    let mut records = Vec::with_capacity(task.kpis.len());
    let mut audit = KpiAudit {
        n_raw: task.kpis.len(),
        ..KpiAudit::default()
    };

    for raw in &task.kpis {
        match KpiRecord::from_raw(raw) {
            Ok(rec) => {
                if rec.operator == Operator::Unknown {
                    audit.unknown_operator += 1;
                    if profile.unknown_operator_policy == UnknownOperatorPolicy::Exclude {
                        audit.n_invalid += 1;
                        continue;
                    }
                }
                if rec.target == 0.0 {
                    audit.zero_target += 1;
                }
                audit.n_valid += 1;
                records.push(rec);
            }
            Err(reason) => {
                audit.n_invalid += 1;
                match reason {
                    InvalidReason::MissingTarget => audit.missing_target += 1,
                    InvalidReason::MissingAchieved => audit.missing_achieved += 1,
                    InvalidReason::MissingBoth => {
                        audit.missing_target += 1;
                        audit.missing_achieved += 1;
                    }
                }
            }
        }
    }

    ValidatedTask { records, audit }
}
