#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFlag {
    NoValidKpis,
    DroppedInvalidKpi,
    UnknownOperator,
    ZeroTarget,
    MissingStaff,
}

impl TaskFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFlag::NoValidKpis => "NO_VALID_KPIS",
            TaskFlag::DroppedInvalidKpi => "DROPPED_INVALID_KPI",
            TaskFlag::UnknownOperator => "UNKNOWN_OPERATOR",
            TaskFlag::ZeroTarget => "ZERO_TARGET",
            TaskFlag::MissingStaff => "MISSING_STAFF",
        }
    }
}

pub fn flag_order() -> &'static [TaskFlag] {
    &[
        TaskFlag::NoValidKpis,
        TaskFlag::DroppedInvalidKpi,
        TaskFlag::UnknownOperator,
        TaskFlag::ZeroTarget,
        TaskFlag::MissingStaff,
    ]
}
