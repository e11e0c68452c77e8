//! Line-delimited JSON loading with explicit skip accounting.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::record::HookRecord;

#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A line that failed to parse, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the source file.
    pub line_number: usize,
    pub reason: String,
}

/// Result of loading one JSONL file: surviving records plus the lines that
/// were skipped. Partial success is the norm, not an error.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<HookRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Loads a JSONL file, parsing each non-blank line independently.
///
/// Lines that fail to parse become [`SkippedLine`] entries rather than
/// aborting the load. A missing file yields an empty outcome with a warning.
pub fn load_jsonl(path: &Path) -> Result<LoadOutcome, JsonlError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "file not found, treating as empty");
            return Ok(LoadOutcome::default());
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    let mut outcome = LoadOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<HookRecord>(trimmed) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                let line_number = index + 1;
                tracing::warn!(
                    path = %path.display(),
                    line_number,
                    error = %e,
                    "skipping invalid JSON line"
                );
                outcome.skipped.push(SkippedLine {
                    line_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn valid_lines_survive_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_lines(
            temp.path(),
            "log.jsonl",
            &[
                r#"{"session_id": "a", "prompt": "first"}"#,
                r#"{"session_id": "a", "prompt": "second"}"#,
            ],
        );

        let outcome = load_jsonl(&path).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.records[0].prompt.as_deref(), Some("first"));
        assert_eq!(outcome.records[1].prompt.as_deref(), Some("second"));
    }

    #[test]
    fn invalid_lines_are_skipped_with_reason() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_lines(
            temp.path(),
            "log.jsonl",
            &[
                r#"{"session_id": "a"}"#,
                "not json at all",
                r#"{"session_id": "b"}"#,
                r#"{"unterminated": "#,
            ],
        );

        let outcome = load_jsonl(&path).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.skipped[0].line_number, 2);
        assert_eq!(outcome.skipped[1].line_number, 4);
        assert!(!outcome.skipped[0].reason.is_empty());
    }

    #[test]
    fn wrong_typed_known_field_does_not_skip_the_line() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_lines(
            temp.path(),
            "log.jsonl",
            &[r#"{"prompt": 5, "cwd": "/work"}"#],
        );

        let outcome = load_jsonl(&path).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.skipped.is_empty());
        assert_eq!(
            outcome.records[0].extra.get("cwd"),
            Some(&serde_json::Value::String("/work".into()))
        );
    }

    #[test]
    fn blank_lines_are_ignored_silently() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_lines(
            temp.path(),
            "log.jsonl",
            &["", r#"{"session_id": "a"}"#, "   ", ""],
        );

        let outcome = load_jsonl(&path).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn missing_file_is_empty_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let outcome = load_jsonl(&temp.path().join("nope.jsonl")).unwrap();
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());
    }
}
