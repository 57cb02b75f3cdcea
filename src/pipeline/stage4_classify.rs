use crate::input::TaskInput;
use crate::input::meta::StaffMeta;
use crate::model::bands::PerformanceBand;
use crate::model::flags::TaskFlag;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_validate::{KpiAudit, ValidatedTask};
use crate::pipeline::stage3_score::TaskScore;

#[derive(Debug, Clone)]
pub struct Classification {
    pub band: PerformanceBand,
    pub flags: Vec<TaskFlag>,
}

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub tasks: &'a [TaskInput],
    pub validated: &'a [ValidatedTask],
    pub scores: &'a [TaskScore],
    pub profile: &'a ScoringProfile,
    pub meta: Option<&'a StaffMeta>,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Vec<Classification> {
    let n_tasks = inputs.tasks.len();
    let mut out = Vec::with_capacity(n_tasks);

    for idx in 0..n_tasks {
        let audit = &inputs.validated[idx].audit;
        let band = classify_task(inputs.scores[idx].score, audit, inputs.profile);
        let flags = collect_flags(&inputs.tasks[idx], audit, inputs.meta);
        out.push(Classification { band, flags });
    }

    out
}

fn classify_task(score: u32, audit: &KpiAudit, profile: &ScoringProfile) -> PerformanceBand {
    if audit.n_valid == 0 {
        return PerformanceBand::Unrated;
    }
    if score >= profile.outstanding_min {
        return PerformanceBand::Outstanding;
    }
    if score >= profile.exceeds_min {
        return PerformanceBand::ExceedsTarget;
    }
    if score >= profile.meets_min {
        return PerformanceBand::MeetsTarget;
    }
    if score >= profile.needs_improvement_min {
        return PerformanceBand::NeedsImprovement;
    }
    PerformanceBand::Unsatisfactory
}

fn collect_flags(task: &TaskInput, audit: &KpiAudit, meta: Option<&StaffMeta>) -> Vec<TaskFlag> {
    let mut flags = Vec::new();

    if audit.n_valid == 0 {
        flags.push(TaskFlag::NoValidKpis);
    }
    if audit.n_invalid > 0 {
        flags.push(TaskFlag::DroppedInvalidKpi);
    }
    if audit.unknown_operator > 0 {
        flags.push(TaskFlag::UnknownOperator);
    }
    if audit.zero_target > 0 {
        flags.push(TaskFlag::ZeroTarget);
    }

    let staff_known = match &task.staff_id {
        Some(id) => meta.map(|m| m.contains(id)).unwrap_or(true),
        None => false,
    };
    if !staff_known {
        flags.push(TaskFlag::MissingStaff);
    }

    flags
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
