use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::TaskInput;
use crate::input::meta::StaffMeta;
use crate::model::bands::{PerformanceBand, band_order};
use crate::model::flags::{TaskFlag, flag_order};
use crate::pipeline::stage2_validate::ValidatedTask;
use crate::pipeline::stage3_score::TaskScore;
use crate::pipeline::stage4_classify::Classification;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    BandStat, FlagStat, ReportContext, SummaryData, format_score, fraction, mean, median, p10, p90,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Task,
    Staff,
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub tasks: &'a [TaskInput],
    pub validated: &'a [ValidatedTask],
    pub scores: &'a [TaskScore],
    pub classifications: &'a [Classification],
    pub meta: Option<&'a StaffMeta>,

    pub tool_name: String,
    pub tool_version: String,
    pub policy: String,
}

pub fn write_reports(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    match mode {
        ReportMode::Task => write_task_tsv(input, &out_dir.join("tasks.tsv"))?,
        ReportMode::Staff => write_staff_tsv(input, &out_dir.join("staff.tsv"))?,
    }

    let summary = build_summary(input, mode);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let ctx = build_report_context(&summary);
    write_text(&out_dir.join("summary.txt"), &render_report_text(&ctx))?;

    Ok(())
}

fn write_task_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "task_id",
        "title",
        "staff_id",
        "staff_name",
        "status",
        "kpis_total",
        "kpis_valid",
        "kpis_invalid",
        "kpi_scores",
        "score",
        "band",
        "flags",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    let n_tasks = input.tasks.len();
    let mut row_order = (0..n_tasks).collect::<Vec<_>>();
    row_order.sort_by(|&a, &b| match input.tasks[a].id.cmp(&input.tasks[b].id) {
        std::cmp::Ordering::Equal => a.cmp(&b),
        other => other,
    });

    for idx in row_order {
        let task = &input.tasks[idx];
        let audit = &input.validated[idx].audit;
        let staff_id = task.staff_id.clone().unwrap_or_default();
        let staff_name = input
            .meta
            .and_then(|m| m.field(&staff_id, "name"))
            .unwrap_or("")
            .to_string();

        let kpi_scores = input.scores[idx]
            .kpi_scores
            .iter()
            .map(|&s| format_score(s))
            .collect::<Vec<_>>()
            .join(",");
        let flags = format_flags(&input.classifications[idx].flags);

        let row = [
            sanitize_field(&task.id),
            sanitize_field(&task.title),
            sanitize_field(&staff_id),
            sanitize_field(&staff_name),
            sanitize_field(task.status.as_deref().unwrap_or("")),
            audit.n_raw.to_string(),
            audit.n_valid.to_string(),
            audit.n_invalid.to_string(),
            kpi_scores,
            input.scores[idx].score.to_string(),
            input.classifications[idx].band.as_str().to_string(),
            flags,
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }

    w.flush()
}

#[derive(Debug, Default)]
struct StaffAccum {
    n_tasks: usize,
    rated_scores: Vec<u32>,
    flags: Vec<TaskFlag>,
}

fn write_staff_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "staff_id",
        "name",
        "job_title",
        "tasks",
        "rated",
        "mean_score",
        "min_score",
        "max_score",
        "flags",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    let mut groups: BTreeMap<String, StaffAccum> = BTreeMap::new();
    for (idx, task) in input.tasks.iter().enumerate() {
        let key = task
            .staff_id
            .clone()
            .unwrap_or_else(|| "(unassigned)".to_string());
        let accum = groups.entry(key).or_default();
        accum.n_tasks += 1;
        if input.classifications[idx].band != PerformanceBand::Unrated {
            accum.rated_scores.push(input.scores[idx].score);
        }
        accum.flags.extend(&input.classifications[idx].flags);
    }

    for (staff_id, accum) in &groups {
        let name = input
            .meta
            .and_then(|m| m.field(staff_id, "name"))
            .unwrap_or("");
        let job_title = input
            .meta
            .and_then(|m| m.field(staff_id, "jobTitle"))
            .unwrap_or("");

        let rated = accum.rated_scores.len();
        let scores_f64 = accum
            .rated_scores
            .iter()
            .map(|&s| s as f64)
            .collect::<Vec<_>>();
        let mean_rounded = mean(&scores_f64).round() as u32;
        let min_score = accum.rated_scores.iter().min().copied().unwrap_or(0);
        let max_score = accum.rated_scores.iter().max().copied().unwrap_or(0);

        let flags = flag_order()
            .iter()
            .filter(|f| accum.flags.contains(*f))
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let row = [
            sanitize_field(staff_id),
            sanitize_field(name),
            sanitize_field(job_title),
            accum.n_tasks.to_string(),
            rated.to_string(),
            mean_rounded.to_string(),
            min_score.to_string(),
            max_score.to_string(),
            flags,
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }

    w.flush()
}

fn build_summary(input: &Stage5Input<'_>, mode: ReportMode) -> SummaryData {
    let n_tasks = input.tasks.len();

    let rated_scores = input
        .classifications
        .iter()
        .zip(input.scores)
        .filter(|(c, _)| c.band != PerformanceBand::Unrated)
        .map(|(_, s)| s.score as f64)
        .collect::<Vec<_>>();
    let n_rated = rated_scores.len();

    let n_staff = input
        .tasks
        .iter()
        .filter_map(|t| t.staff_id.as_deref())
        .collect::<BTreeSet<_>>()
        .len();

    let bands = band_order()
        .iter()
        .map(|band| {
            let count = input
                .classifications
                .iter()
                .filter(|c| c.band == *band)
                .count();
            BandStat {
                name: band.as_str(),
                count,
                fraction: fraction(count, n_tasks),
            }
        })
        .collect::<Vec<_>>();

    let flags = flag_order()
        .iter()
        .map(|flag| {
            let count = input
                .classifications
                .iter()
                .filter(|c| c.flags.contains(flag))
                .count();
            FlagStat {
                name: flag.as_str(),
                count,
                fraction: fraction(count, n_tasks),
            }
        })
        .collect::<Vec<_>>();

    let mut kpis_total = 0usize;
    let mut kpis_valid = 0usize;
    let mut kpis_invalid = 0usize;
    let mut unknown_operator_entries = 0usize;
    let mut zero_target_entries = 0usize;
    for task in input.validated {
        kpis_total += task.audit.n_raw;
        kpis_valid += task.audit.n_valid;
        kpis_invalid += task.audit.n_invalid;
        unknown_operator_entries += task.audit.unknown_operator;
        zero_target_entries += task.audit.zero_target;
    }

    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        resolution: match mode {
            ReportMode::Task => "task".to_string(),
            ReportMode::Staff => "staff".to_string(),
        },
        policy: input.policy.clone(),
        meta_loaded: input.meta.is_some(),

        n_tasks,
        n_rated,
        n_unrated: n_tasks - n_rated,
        n_staff,

        score_mean: mean(&rated_scores),
        score_median: median(&rated_scores),
        score_p10: p10(&rated_scores),
        score_p90: p90(&rated_scores),

        bands,
        flags,

        kpis_total,
        kpis_valid,
        kpis_invalid,
        unknown_operator_entries,
        zero_target_entries,
    }
}

fn build_report_context(summary: &SummaryData) -> ReportContext {
    ReportContext {
        n_tasks: summary.n_tasks,
        n_rated: summary.n_rated,
        n_unrated: summary.n_unrated,
        policy: summary.policy.clone(),
        meta_loaded: summary.meta_loaded,
        score_mean: summary.score_mean,
        score_median: summary.score_median,
        score_p10: summary.score_p10,
        score_p90: summary.score_p90,
        bands: summary.bands.clone(),
        flags: summary.flags.clone(),
        kpis_total: summary.kpis_total,
        kpis_valid: summary.kpis_valid,
        kpis_invalid: summary.kpis_invalid,
        unknown_operator_entries: summary.unknown_operator_entries,
        zero_target_entries: summary.zero_target_entries,
    }
}

fn format_flags(flags: &[TaskFlag]) -> String {
    flags
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
