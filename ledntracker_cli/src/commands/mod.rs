//! CLI subcommand implementations.

pub mod browse;
pub mod export;
pub mod list;
