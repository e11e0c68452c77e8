//! Core domain logic for the hook-output toolchain.
//!
//! This crate contains the fundamental types and logic for:
//! - Record model: the typed shape of captured hook events
//! - JSONL loading: per-line parsing with explicit skip accounting
//! - Date selection: picking daily log files inside an inclusive range
//! - Grouping: collecting prompts and tool inputs per session

pub mod date;
pub mod group;
pub mod jsonl;
pub mod record;

pub use date::{DATE_FORMAT, DateError, DateRange, LogDate, files_in_range};
pub use group::{PromptEntry, SessionGroups, ToolInputEntry, collect_prompts, collect_tool_inputs};
pub use jsonl::{JsonlError, LoadOutcome, SkippedLine, load_jsonl};
pub use record::HookRecord;
