use crate::report::{BandStat, ReportContext, format_fraction, format_score};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Task Performance Scoring Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Overall\n");
    out.push_str(&format!(
        "Tasks scored: {} (rated {}, unrated {})\n",
        ctx.n_tasks, ctx.n_rated, ctx.n_unrated
    ));
    out.push_str(&format!("Unknown-operator policy: {}\n", ctx.policy));
    out.push_str(&format!("Dominant bands: {}\n", dominant_bands(&ctx.bands)));
    out.push_str(&format!(
        "Overall assessment: {}\n\n",
        overall_statement(&ctx.bands)
    ));

    out.push_str("2. Score distribution (rated tasks)\n");
    out.push_str(&format!("Mean: {}\n", format_score(ctx.score_mean)));
    out.push_str(&format!("Median: {}\n", format_score(ctx.score_median)));
    out.push_str(&format!("P10: {}\n", format_score(ctx.score_p10)));
    out.push_str(&format!("P90: {}\n\n", format_score(ctx.score_p90)));

    out.push_str("3. Performance bands\n");
    for band in &ctx.bands {
        out.push_str(&format!(
            "{}: {} ({})\n",
            band.name,
            band.count,
            format_fraction(band.fraction)
        ));
    }
    out.push('\n');

    out.push_str("4. Data quality\n");
    out.push_str(&format!(
        "KPI entries: {} total, {} valid, {} invalid\n",
        ctx.kpis_total, ctx.kpis_valid, ctx.kpis_invalid
    ));
    out.push_str(&format!(
        "Unknown-operator entries: {}\n",
        ctx.unknown_operator_entries
    ));
    out.push_str(&format!("Zero-target entries: {}\n", ctx.zero_target_entries));
    for flag in &ctx.flags {
        out.push_str(&format!(
            "{} fraction: {}\n",
            flag.name,
            format_fraction(flag.fraction)
        ));
    }
    if !ctx.meta_loaded {
        out.push_str("Note: staff metadata not provided; staff names are unavailable.\n");
    }

    out
}

fn dominant_bands(bands: &[BandStat]) -> String {
    let mut sorted = bands.to_vec();
    sorted.sort_by(|a, b| {
        match b
            .fraction
            .partial_cmp(&a.fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.name.cmp(b.name),
            other => other,
        }
    });
    let mut parts = Vec::new();
    for band in sorted.iter().take(2) {
        parts.push(format!("{} ({})", band.name, format_fraction(band.fraction)));
    }
    parts.join(", ")
}

fn overall_statement(bands: &[BandStat]) -> &'static str {
    let mut sorted = bands.to_vec();
    sorted.sort_by(|a, b| {
        match b
            .fraction
            .partial_cmp(&a.fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.name.cmp(b.name),
            other => other,
        }
    });
    let top = sorted.first().map(|b| b.name).unwrap_or("Unrated");
    match top {
        "Outstanding" => "performance is well above target across the board",
        "ExceedsTarget" => "most tasks exceed their targets",
        "MeetsTarget" => "targets are broadly met",
        "NeedsImprovement" => "performance falls short of targets",
        "Unsatisfactory" => "performance is far below target",
        _ => "most tasks lack scorable KPIs; review the KPI definitions",
    }
}
