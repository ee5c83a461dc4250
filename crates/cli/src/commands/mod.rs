//! CLI subcommand implementations

pub mod estimate;
pub mod health;
pub mod regions;
