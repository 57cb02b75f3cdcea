use crate::model::scoring::{kpi_score, mean_score};
use crate::pipeline::stage2_validate::Stage2Output;

#[derive(Debug, Clone)]
pub struct TaskScore {
    pub kpi_scores: Vec<f64>,
    pub score: u32,
}

#[derive(Debug)]
pub struct Stage3Output {
    pub scores: Vec<TaskScore>,
}

/// Scores every task over its validated KPI records. Tasks with no
/// scorable records get a score of 0.
pub fn run_stage3(validated: &Stage2Output) -> Stage3Output {
    let mut scores = Vec::with_capacity(validated.tasks.len());
    for task in &validated.tasks {
        let kpi_scores = task.records.iter().map(kpi_score).collect::<Vec<_>>();
        let score = mean_score(&kpi_scores);
        scores.push(TaskScore { kpi_scores, score });
    }
    Stage3Output { scores }
}
