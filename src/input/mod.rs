use std::path::{Path, PathBuf};

pub mod meta;
pub mod tasks;

use meta::{StaffMeta, load_meta};
use tasks::parse_tasks;
use thiserror::Error;

use crate::model::kpi::RawKpi;

/// One task record as loaded from a task export, before validation.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub id: String,
    pub title: String,
    pub staff_id: Option<String>,
    pub status: Option<String>,
    pub kpis: Vec<RawKpi>,
}

#[derive(Debug)]
pub struct TaskBundle {
    pub tasks_path: PathBuf,
    pub tasks: Vec<TaskInput>,
    pub meta: Option<StaffMeta>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Loads a task export plus optional staff metadata. `input` may be the
/// export file itself or a directory containing `tasks.json`.
pub fn load_tasks(input: &Path, meta_path: Option<&Path>) -> Result<TaskBundle, InputError> {
    let tasks_path = find_tasks_path(input)?;
    tracing::info!("discovered task export: {}", tasks_path.display());

    let text = std::fs::read_to_string(&tasks_path)?;
    let tasks = parse_tasks(&text)?;

    let meta = match meta_path {
        Some(path) => Some(load_meta(path)?),
        None => None,
    };

    Ok(TaskBundle {
        tasks_path,
        tasks,
        meta,
    })
}

fn find_tasks_path(input: &Path) -> Result<PathBuf, InputError> {
    if input.is_file() {
        return Ok(input.to_path_buf());
    }
    let candidate = input.join("tasks.json");
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(InputError::MissingInput(format!(
        "tasks.json not found in {}",
        input.display()
    )))
}
