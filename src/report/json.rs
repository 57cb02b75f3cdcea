use serde::Serialize;

use crate::report::SummaryData;

#[derive(Serialize)]
struct SummaryJson<'a> {
    tool: ToolJson<'a>,
    run: RunJson<'a>,
    totals: TotalsJson,
    scores: ScoresJson,
    bands: Vec<NamedFractionJson<'a>>,
    quality: QualityJson<'a>,
}

#[derive(Serialize)]
struct ToolJson<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct RunJson<'a> {
    resolution: &'a str,
    unknown_operator_policy: &'a str,
    staff_meta: bool,
}

#[derive(Serialize)]
struct TotalsJson {
    tasks: usize,
    rated: usize,
    unrated: usize,
    staff: usize,
}

#[derive(Serialize)]
struct ScoresJson {
    mean: f64,
    median: f64,
    p10: f64,
    p90: f64,
}

#[derive(Serialize)]
struct NamedFractionJson<'a> {
    name: &'a str,
    count: usize,
    fraction: f64,
}

#[derive(Serialize)]
struct QualityJson<'a> {
    kpis_total: usize,
    kpis_valid: usize,
    kpis_invalid: usize,
    unknown_operator_entries: usize,
    zero_target_entries: usize,
    flags: Vec<NamedFractionJson<'a>>,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let doc = SummaryJson {
        tool: ToolJson {
            name: &data.tool_name,
            version: &data.tool_version,
        },
        run: RunJson {
            resolution: &data.resolution,
            unknown_operator_policy: &data.policy,
            staff_meta: data.meta_loaded,
        },
        totals: TotalsJson {
            tasks: data.n_tasks,
            rated: data.n_rated,
            unrated: data.n_unrated,
            staff: data.n_staff,
        },
        scores: ScoresJson {
            mean: data.score_mean,
            median: data.score_median,
            p10: data.score_p10,
            p90: data.score_p90,
        },
        bands: data
            .bands
            .iter()
            .map(|b| NamedFractionJson {
                name: b.name,
                count: b.count,
                fraction: b.fraction,
            })
            .collect(),
        quality: QualityJson {
            kpis_total: data.kpis_total,
            kpis_valid: data.kpis_valid,
            kpis_invalid: data.kpis_invalid,
            unknown_operator_entries: data.unknown_operator_entries,
            zero_target_entries: data.zero_target_entries,
            flags: data
                .flags
                .iter()
                .map(|f| NamedFractionJson {
                    name: f.name,
                    count: f.count,
                    fraction: f.fraction,
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&doc)
}
