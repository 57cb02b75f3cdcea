use std::collections::HashMap;
use std::path::Path;

use crate::input::InputError;

/// Staff metadata joined onto tasks by staff id. Columns beyond the join
/// key are carried as opaque strings.
#[derive(Debug, Clone)]
pub struct StaffMeta {
    pub columns: Vec<String>,
    rows: HashMap<String, Vec<String>>,
}

impl StaffMeta {
    pub fn contains(&self, staff_id: &str) -> bool {
        self.rows.contains_key(staff_id)
    }

    pub fn field(&self, staff_id: &str, column: &str) -> Option<&str> {
        let idx = self
            .columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))?;
        self.rows
            .get(staff_id)
            .and_then(|row| row.get(idx))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn load_meta(path: &Path) -> Result<StaffMeta, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_meta(&text)
}

pub fn parse_meta(text: &str) -> Result<StaffMeta, InputError> {
    let mut lines = text.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| InputError::Parse("staff meta file is empty".to_string()))?;
    let header_cols: Vec<String> = header_line
        .split('\t')
        .map(|s| s.trim().to_string())
        .collect();
    if header_cols.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse(
            "staff meta file header is empty".to_string(),
        ));
    }

    let mut staff_col = 0usize;
    for (idx, name) in header_cols.iter().enumerate() {
        let lower = name.to_ascii_lowercase();
        if lower == "staff" || lower == "staffid" || lower == "staff_id" {
            staff_col = idx;
            break;
        }
    }

    let mut columns = Vec::new();
    for (idx, name) in header_cols.iter().enumerate() {
        if idx != staff_col {
            columns.push(name.to_string());
        }
    }

    let mut rows: HashMap<String, Vec<String>> = HashMap::new();
    let mut line_no = 1usize;

    for line in lines {
        line_no += 1;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if staff_col >= fields.len() {
            tracing::warn!("meta line has no staff column; skipping (line {})", line_no);
            continue;
        }
        let staff_id = fields[staff_col].trim().to_string();
        if staff_id.is_empty() {
            tracing::warn!("meta line has empty staff id; skipping (line {})", line_no);
            continue;
        }
        if rows.contains_key(&staff_id) {
            tracing::warn!(
                "duplicate staff id in metadata; keeping first (line {}, staff {})",
                line_no,
                staff_id
            );
            continue;
        }

        let mut row = Vec::with_capacity(columns.len());
        for (idx, _name) in header_cols.iter().enumerate() {
            if idx == staff_col {
                continue;
            }
            let value = fields.get(idx).map(|s| s.trim()).unwrap_or("");
            row.push(value.to_string());
        }
        rows.insert(staff_id, row);
    }

    Ok(StaffMeta { columns, rows })
}
