//! Optional text-report persistence.
//!
//! When enabled, each fetch session writes a plain-text report next to the
//! CSV with the same filename stem.

use crate::aggregator::{AggregateRow, ThroughputReport};
use crate::output::table::{render_memo_table, render_throughput};
use crate::utils::error::OutputError;
use chrono::Utc;
use log::info;
use std::fs;
use std::path::Path;

/// Assemble the report contents for one fetch session
pub fn build_report(
    account: &str,
    window_label: &str,
    record_count: usize,
    memo_rows: &[AggregateRow],
    throughput: Option<&ThroughputReport>,
) -> String {
    let mut out = String::new();

    out.push_str("Transaction Analysis Report\n");
    out.push_str("===========================\n\n");
    out.push_str(&format!("Account:      {}\n", account));
    out.push_str(&format!("Time range:   {}\n", window_label));
    out.push_str(&format!(
        "Generated at: {} UTC\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Transactions: {}\n\n", record_count));

    out.push_str("Memo statistics\n");
    out.push_str("---------------\n");
    out.push_str(&render_memo_table(memo_rows));

    if let Some(report) = throughput {
        out.push_str("\nSlot throughput\n");
        out.push_str("---------------\n");
        out.push_str(&render_throughput(report));
    }

    out
}

/// Write the report to disk
pub fn write_report(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    fs::write(output_path, contents).map_err(OutputError::WriteFailed)?;
    info!("Report written to {}", output_path.display());
    Ok(())
}
