//! Date-named log files and inclusive date ranges.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Filename date format used by the daily logs.
pub const DATE_FORMAT: &str = "%Y_%m_%d";

#[derive(Debug, Error)]
pub enum DateError {
    #[error("invalid date: {0}, expected YYYY_MM_DD")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A calendar date as it appears in log filenames (`YYYY_MM_DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogDate(NaiveDate);

impl FromStr for LogDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::Invalid(s.to_string()))
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: LogDate,
    pub end: LogDate,
}

impl DateRange {
    /// Both boundaries are inclusive.
    #[must_use]
    pub fn contains(&self, date: LogDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Selects the `*.json` files in `dir` whose stem is a date inside `range`.
///
/// Files whose names do not parse as dates are skipped, not errors. Selected
/// paths are returned sorted by filename.
pub fn files_in_range(dir: &Path, range: &DateRange) -> Result<Vec<PathBuf>, DateError> {
    let mut selected = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match stem.parse::<LogDate>() {
            Ok(date) if range.contains(date) => selected.push(path),
            Ok(_) => {}
            Err(_) => {
                tracing::debug!(file = %path.display(), "skipping file without a date name");
            }
        }
    }

    selected.sort();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> LogDate {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_displays_underscore_format() {
        let d = date("2024_01_31");
        assert_eq!(d.to_string(), "2024_01_31");
    }

    #[test]
    fn rejects_other_formats() {
        assert!("2024-01-31".parse::<LogDate>().is_err());
        assert!("2024_13_01".parse::<LogDate>().is_err());
        assert!("not_a_date".parse::<LogDate>().is_err());
        assert!("".parse::<LogDate>().is_err());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange {
            start: date("2024_01_01"),
            end: date("2024_01_03"),
        };
        assert!(range.contains(date("2024_01_01")));
        assert!(range.contains(date("2024_01_02")));
        assert!(range.contains(date("2024_01_03")));
        assert!(!range.contains(date("2023_12_31")));
        assert!(!range.contains(date("2024_01_04")));
    }

    #[test]
    fn selects_only_date_named_json_files_in_range() {
        let temp = tempfile::tempdir().unwrap();
        for name in [
            "2024_01_01.json",
            "2024_01_02.json",
            "2024_01_03.json",
            "2024_01_04.json",
            "notes.json",
            "2024_01_02.jsonl",
        ] {
            std::fs::write(temp.path().join(name), "[]").unwrap();
        }

        let range = DateRange {
            start: date("2024_01_01"),
            end: date("2024_01_03"),
        };
        let files = files_in_range(temp.path(), &range).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["2024_01_01.json", "2024_01_02.json", "2024_01_03.json"]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let range = DateRange {
            start: date("2024_01_01"),
            end: date("2024_01_03"),
        };
        assert!(files_in_range(&temp.path().join("nope"), &range).is_err());
    }
}
