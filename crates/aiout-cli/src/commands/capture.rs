//! Capture command for receiving events from assistant hooks.
//!
//! Each invocation reads one hook payload from stdin and appends it as a
//! single JSONL line to the daily log file.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, Utc};

use aiout_core::{DATE_FORMAT, HookRecord};

/// Parses the stdin payload, falling back to an empty record.
///
/// Hooks sometimes run with no payload at all, and a hook must never fail
/// the assistant, so malformed or non-object input is captured as empty
/// rather than rejected.
fn parse_input(input: &[u8]) -> HookRecord {
    match serde_json::from_slice::<HookRecord>(input) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "stdin was not a JSON object, capturing an empty record");
            HookRecord::default()
        }
    }
}

/// Captures one event into the log under `output_dir`.
///
/// Injects `debug_event_type` and `timestamp`, overwriting them if the
/// producer supplied its own. Returns the path of the file appended to.
pub fn capture_impl(output_dir: &Path, event: &str, input: &[u8], test: bool) -> Result<PathBuf> {
    let mut record = parse_input(input);
    record.debug_event_type = Some(event.to_string());
    record.timestamp = Some(Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string());

    fs::create_dir_all(output_dir).context("failed to create output directory")?;

    let file_stem = if test {
        "test".to_string()
    } else {
        Local::now().format(DATE_FORMAT).to_string()
    };
    let path = output_dir.join(format!("{file_stem}.jsonl"));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let json = serde_json::to_string(&record).context("failed to serialize record")?;
    writeln!(file, "{json}").context("failed to write record")?;

    tracing::info!(event, path = %path.display(), "captured hook event");

    Ok(path)
}

/// Reads the hook payload from stdin and appends it to the daily log.
///
/// This is the public API used by the CLI.
pub fn run(output_dir: &Path, event: &str, test: bool) -> Result<()> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read stdin")?;

    capture_impl(output_dir, event, &input, test)?;
    Ok(())
}
