use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use teravince_score::input::load_tasks;
use teravince_score::logging;
use teravince_score::model::thresholds::ScoringProfile;
use teravince_score::pipeline::stage2_validate::run_stage2;
use teravince_score::pipeline::stage3_score::run_stage3;
use teravince_score::pipeline::stage4_classify::{Stage4Inputs, run_stage4};
use teravince_score::pipeline::stage5_report::{ReportMode, Stage5Input, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "teravince-score",
    version,
    about = "Deterministic KPI scoring and review reporting for HR task exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a task export and write TSV, text and JSON reports.
    Score {
        /// Task export file, or a directory containing tasks.json.
        #[arg(long)]
        input: PathBuf,
        /// Output directory for reports.
        #[arg(long)]
        out: PathBuf,
        /// Report rollup.
        #[arg(long, value_enum, default_value = "task")]
        mode: ModeArg,
        /// Optional staff metadata TSV joined by staff id.
        #[arg(long)]
        meta: Option<PathBuf>,
        /// Exclude unknown-operator KPI entries instead of scoring them 0.
        #[arg(long)]
        exclude_unknown_operators: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Task,
    Staff,
}

impl From<ModeArg> for ReportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Task => ReportMode::Task,
            ModeArg::Staff => ReportMode::Staff,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Score {
        input,
        out,
        mode,
        meta,
        exclude_unknown_operators,
    } = cli.command;

    let profile = if exclude_unknown_operators {
        ScoringProfile::exclude_unknown_v1()
    } else {
        ScoringProfile::default_v1()
    };

    let bundle = load_tasks(&input, meta.as_deref()).map_err(|e| e.to_string())?;
    tracing::info!(
        "loaded {} task(s) from {}",
        bundle.tasks.len(),
        bundle.tasks_path.display()
    );

    let stage2 = run_stage2(&bundle.tasks, &profile);
    let stage3 = run_stage3(&stage2);
    let classifications = run_stage4(&Stage4Inputs {
        tasks: &bundle.tasks,
        validated: &stage2.tasks,
        scores: &stage3.scores,
        profile: &profile,
        meta: bundle.meta.as_ref(),
    });

    let report_input = Stage5Input {
        tasks: &bundle.tasks,
        validated: &stage2.tasks,
        scores: &stage3.scores,
        classifications: &classifications,
        meta: bundle.meta.as_ref(),
        tool_name: "teravince-score".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        policy: profile.policy_name().to_string(),
    };
    write_reports(&report_input, &out, mode.into()).map_err(|e| e.to_string())?;
    tracing::info!("reports written to {}", out.display());

    Ok(())
}
