//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hook-output toolchain for AI coding assistants.
///
/// Captures hook events as daily JSONL logs, converts them into JSON array
/// files, and collects per-session prompt and tool-input files for analysis.
#[derive(Debug, Parser)]
#[command(name = "aiout", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Capture one hook event from stdin and append it to the daily log.
    Capture {
        /// Hook event type (e.g., PreToolUse).
        #[arg(long)]
        event: String,

        /// Ignored; stands in for the `--config` flag old hook commands
        /// passed to the capture script. Real configuration goes through
        /// the global `--config`.
        #[arg(long, value_name = "PATH")]
        config_file: Option<PathBuf>,

        /// Write to test.jsonl instead of the daily log.
        #[arg(long)]
        test: bool,
    },

    /// Convert every daily JSONL log into a JSON array file.
    Convert,

    /// Collect per-session prompts and tool inputs from a date range.
    Collect {
        /// Start date in YYYY_MM_DD format (inclusive).
        #[arg(long)]
        start: String,

        /// End date in YYYY_MM_DD format (inclusive).
        #[arg(long)]
        end: String,

        /// Where to write the collected files (defaults to the output dir).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}
