//! Command implementations for the CLI.

pub mod analyze;

pub use analyze::{execute_analyze, AnalyzeArgs};
