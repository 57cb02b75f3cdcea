pub mod json;
pub mod text;

#[derive(Debug, Clone)]
pub struct BandStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone)]
pub struct FlagStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub resolution: String,
    pub policy: String,
    pub meta_loaded: bool,

    pub n_tasks: usize,
    pub n_rated: usize,
    pub n_unrated: usize,
    pub n_staff: usize,

    pub score_mean: f64,
    pub score_median: f64,
    pub score_p10: f64,
    pub score_p90: f64,

    pub bands: Vec<BandStat>,
    pub flags: Vec<FlagStat>,

    pub kpis_total: usize,
    pub kpis_valid: usize,
    pub kpis_invalid: usize,
    pub unknown_operator_entries: usize,
    pub zero_target_entries: usize,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub n_tasks: usize,
    pub n_rated: usize,
    pub n_unrated: usize,
    pub policy: String,
    pub meta_loaded: bool,

    pub score_mean: f64,
    pub score_median: f64,
    pub score_p10: f64,
    pub score_p90: f64,

    pub bands: Vec<BandStat>,
    pub flags: Vec<FlagStat>,

    pub kpis_total: usize,
    pub kpis_valid: usize,
    pub kpis_invalid: usize,
    pub unknown_operator_entries: usize,
    pub zero_target_entries: usize,
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_fraction(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}
