//! Convert command: daily JSONL logs into JSON array files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use aiout_core::load_jsonl;

/// Subdirectory of the output dir receiving the converted arrays.
const ARRAY_DIR: &str = "json_list";

/// Lists the `*.jsonl` files directly under `dir`, sorted by name.
fn jsonl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("jsonl"))
        .collect();
    files.sort();
    Ok(files)
}

/// Converts every JSONL log under `output_dir` into a pretty-printed JSON
/// array under `output_dir/json_list/`.
///
/// Files with zero surviving records produce no output file. Invalid lines
/// within a file are skipped, not fatal.
pub fn run(output_dir: &Path) -> Result<()> {
    let files = jsonl_files(output_dir)?;
    tracing::info!(count = files.len(), "found JSONL files");

    let array_dir = output_dir.join(ARRAY_DIR);
    fs::create_dir_all(&array_dir)
        .with_context(|| format!("failed to create {}", array_dir.display()))?;

    for path in &files {
        let outcome = load_jsonl(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        if outcome.records.is_empty() {
            tracing::info!(file = %path.display(), "no valid records, skipping");
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let out_path = array_dir.join(format!("{stem}.json"));

        let json = serde_json::to_string_pretty(&outcome.records)
            .context("failed to serialize records")?;
        fs::write(&out_path, json)
            .with_context(|| format!("failed to write {}", out_path.display()))?;

        tracing::info!(
            file = %out_path.display(),
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "wrote JSON array"
        );
    }

    Ok(())
}
