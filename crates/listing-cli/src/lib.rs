//! CLI library components for listing analysis.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
