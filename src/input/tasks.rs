use serde_json::{Map, Value};

use crate::input::{InputError, TaskInput};
use crate::model::kpi::{Operator, RawKpi};

/// Parses a task export. The document is either a JSON array of task
/// objects or an object carrying the array under a `tasks` field.
///
/// Parsing is tolerant below the document level: entries that are not
/// objects are skipped with a warning, unknown fields are ignored, a
/// missing or non-array `kpis` value degrades to an empty list, and KPI
/// amounts decode only from actual JSON numbers.
pub fn parse_tasks(text: &str) -> Result<Vec<TaskInput>, InputError> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| InputError::Parse(format!("invalid task JSON: {e}")))?;

    let entries = match &root {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("tasks") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                return Err(InputError::InvalidInput(
                    "expected a task array or an object with a tasks array".to_string(),
                ));
            }
        },
        _ => {
            return Err(InputError::InvalidInput(
                "expected a task array or an object with a tasks array".to_string(),
            ));
        }
    };

    let mut tasks = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let Value::Object(obj) = entry else {
            tracing::warn!("task entry {} is not an object; skipping", idx);
            continue;
        };
        tasks.push(parse_task(obj, idx));
    }
    Ok(tasks)
}

fn parse_task(obj: &Map<String, Value>, idx: usize) -> TaskInput {
    let id = match obj.get("id").or_else(|| obj.get("_id")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("task-{idx}"),
    };
    let title = string_field(obj, "title").unwrap_or_default();
    let staff_id = string_field(obj, "staffId").or_else(|| string_field(obj, "staff_id"));
    let status = string_field(obj, "status");

    let kpis = match obj.get("kpis") {
        Some(Value::Array(items)) => items.iter().map(parse_kpi).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => {
            tracing::warn!("task {}: kpis is not an array; treating as empty", id);
            Vec::new()
        }
    };

    TaskInput {
        id,
        title,
        staff_id,
        status,
        kpis,
    }
}

fn parse_kpi(value: &Value) -> RawKpi {
    let Value::Object(obj) = value else {
        // Counted as an entry but carries no scorable fields.
        return RawKpi::default();
    };
    RawKpi {
        title: string_field(obj, "title"),
        target_amount: number_field(obj, "targetAmount"),
        achieved_amount: number_field(obj, "achievedAmount"),
        operator: Operator::parse(obj.get("operator").and_then(Value::as_str)),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    // Numbers only: a quoted "100", bool, null or object is not a valid amount.
    obj.get(key).and_then(Value::as_f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tasks.rs"]
mod tests;
