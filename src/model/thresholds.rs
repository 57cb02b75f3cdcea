/// How KPI entries with an unrecognized operator are treated.
/// `ScoreZero` keeps them in the denominator at score 0; `Exclude` drops
/// them like invalid entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownOperatorPolicy {
    ScoreZero,
    Exclude,
}

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub outstanding_min: u32,
    pub exceeds_min: u32,
    pub meets_min: u32,
    pub needs_improvement_min: u32,
    pub unknown_operator_policy: UnknownOperatorPolicy,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            outstanding_min: 90,
            exceeds_min: 75,
            meets_min: 60,
            needs_improvement_min: 40,
            unknown_operator_policy: UnknownOperatorPolicy::ScoreZero,
        }
    }

    pub fn exclude_unknown_v1() -> Self {
        let mut base = Self::default_v1();
        base.unknown_operator_policy = UnknownOperatorPolicy::Exclude;
        base
    }

    pub fn policy_name(&self) -> &'static str {
        match self.unknown_operator_policy {
            UnknownOperatorPolicy::ScoreZero => "score-zero",
            UnknownOperatorPolicy::Exclude => "exclude",
        }
    }
}
