//! CLI subcommands

pub mod clean;
pub mod detail;
pub mod list;
pub mod markdown;
pub mod render;
