/// Comparison direction of a KPI. `GreaterThan` means higher achieved
/// amounts are better, `LessThan` means lower is better. Anything else on
/// the wire maps to `Unknown` and is scored by policy, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    GreaterThan,
    LessThan,
    #[default]
    Unknown,
}

impl Operator {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("greaterThan") => Operator::GreaterThan,
            Some("lessThan") => Operator::LessThan,
            _ => Operator::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::Unknown => "unknown",
        }
    }
}

/// One KPI entry as decoded from an untrusted task export. Numeric fields
/// are `Some` only when the source value was an actual JSON number.
#[derive(Debug, Clone, Default)]
pub struct RawKpi {
    pub title: Option<String>,
    pub target_amount: Option<f64>,
    pub achieved_amount: Option<f64>,
    pub operator: Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    MissingTarget,
    MissingAchieved,
    MissingBoth,
}

/// A KPI entry that passed validation and can be scored.
#[derive(Debug, Clone, Copy)]
pub struct KpiRecord {
    pub target: f64,
    pub achieved: f64,
    pub operator: Operator,
}

impl KpiRecord {
    pub fn from_raw(raw: &RawKpi) -> Result<KpiRecord, InvalidReason> {
        match (raw.target_amount, raw.achieved_amount) {
            (Some(target), Some(achieved)) => Ok(KpiRecord {
                target,
                achieved,
                operator: raw.operator,
            }),
            (None, Some(_)) => Err(InvalidReason::MissingTarget),
            (Some(_), None) => Err(InvalidReason::MissingAchieved),
            (None, None) => Err(InvalidReason::MissingBoth),
        }
    }
}
