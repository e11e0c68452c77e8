//! CLI subcommand implementations.

pub mod capture;
pub mod collect;
pub mod convert;
