//! Collect command: group prompts and tool inputs by session over a date range.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use aiout_core::{
    DateRange, HookRecord, LogDate, SessionGroups, collect_prompts, collect_tool_inputs,
    files_in_range,
};

/// Parses a `--start`/`--end` argument, failing fast on bad input.
fn parse_date_arg(value: &str, name: &str) -> Result<LogDate> {
    value.parse().with_context(|| {
        format!("invalid --{name} date {value:?}, expected YYYY_MM_DD (e.g., 2024_01_31)")
    })
}

/// A source file is either an array of records or a single record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<HookRecord>),
    One(Box<HookRecord>),
}

/// Loads one JSON file's records.
///
/// Returns `None` when the file cannot be read or parsed; the whole file's
/// contribution is dropped in that case, unlike the line-level tolerance of
/// convert.
fn load_records(path: &Path) -> Option<Vec<HookRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "failed to read file, dropping it");
            return None;
        }
    };

    match serde_json::from_str::<Document>(&content) {
        Ok(Document::Many(records)) => Some(records),
        Ok(Document::One(record)) => Some(vec![*record]),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "failed to parse file, dropping it");
            None
        }
    }
}

/// Writes one pretty-printed array per non-empty session.
fn write_session_files<T: Serialize>(
    groups: &SessionGroups<T>,
    dir: &Path,
    prefix: &str,
) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    for (session_id, entries) in groups {
        if entries.is_empty() {
            continue;
        }
        let path = dir.join(format!("{prefix}_session_{session_id}.json"));
        let json = serde_json::to_string_pretty(entries).context("failed to serialize session")?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(
            session = %session_id,
            items = entries.len(),
            file = %path.display(),
            "saved session file"
        );
    }

    Ok(())
}

/// Collects per-session prompt and tool-input files from the date-bounded
/// logs under `input_dir`, writing into `out_dir`.
pub fn run(input_dir: &Path, out_dir: &Path, start: &str, end: &str) -> Result<()> {
    let range = DateRange {
        start: parse_date_arg(start, "start")?,
        end: parse_date_arg(end, "end")?,
    };

    if !input_dir.exists() {
        bail!("input directory does not exist: {}", input_dir.display());
    }

    tracing::info!(
        start,
        end,
        input = %input_dir.display(),
        output = %out_dir.display(),
        "collecting sessions"
    );

    let files = files_in_range(input_dir, &range)
        .with_context(|| format!("failed to scan {}", input_dir.display()))?;
    if files.is_empty() {
        tracing::info!("no files found in the specified date range");
        return Ok(());
    }
    tracing::info!(count = files.len(), "found files in date range");

    let mut records = Vec::new();
    for path in &files {
        if let Some(mut loaded) = load_records(path) {
            tracing::debug!(file = %path.display(), records = loaded.len(), "loaded file");
            records.append(&mut loaded);
        }
    }
    tracing::info!(total = records.len(), "loaded records");

    let prompts = collect_prompts(&records);
    tracing::info!(sessions = prompts.len(), "collected prompt sessions");
    write_session_files(&prompts, &out_dir.join("prompts"), "prompts")?;

    let tool_inputs = collect_tool_inputs(&records);
    tracing::info!(sessions = tool_inputs.len(), "collected tool-input sessions");
    write_session_files(&tool_inputs, &out_dir.join("tool_inputs"), "tool_inputs")?;

    Ok(())
}
