//! Analyze command implementation.
//!
//! One pass over a selected time window:
//! 1. Fetch and parse transactions from the history API
//! 2. Persist them as CSV
//! 3. Re-read the CSV and print memo statistics
//! 4. Optionally run the slot-throughput deep dive
//! 5. Optionally persist a text report

use crate::aggregator::{analyze_throughput, generate_memo_stats};
use crate::fetch::{fetch_records, TransactionSource};
use crate::output::{
    build_report, output_filename, read_records, render_memo_table, render_throughput,
    write_records, write_report,
};
use crate::utils::config::Config;
use crate::utils::error::FetchError;
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use log::info;

/// Arguments for one analyze pass
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Look-back window, `None` meaning all history
    pub window: Option<Duration>,

    /// Human-readable window label for logs and the report
    pub window_label: String,
}

/// Execute one analyze pass.
///
/// Never fatal to the session: an empty window or a failed lookup prints
/// "no transactions found" and returns Ok, so the caller's menu loop keeps
/// running. Only output I/O failures bubble up as errors.
pub fn execute_analyze(
    config: &Config,
    source: &impl TransactionSource,
    args: &AnalyzeArgs,
) -> Result<()> {
    info!(
        "Analyzing account {} over: {}",
        config.account, args.window_label
    );

    println!("Fetching and parsing transactions...");
    let outcome = match fetch_records(source, &config.account, args.window) {
        Ok(outcome) => outcome,
        Err(FetchError::LookupFailed) => {
            println!("No transactions found for the selected time range.");
            return Ok(());
        }
    };

    if outcome.records.is_empty() {
        println!("No transactions found for the selected time range.");
        return Ok(());
    }

    let timestamp = Utc::now().timestamp();
    let csv_path = config
        .output_dir
        .join(output_filename(&config.account, timestamp, "csv"));
    write_records(&outcome.records, &csv_path)
        .with_context(|| format!("Failed to write {}", csv_path.display()))?;

    println!("Analyzing {} transactions...", outcome.records.len());

    // Statistics run over the persisted copy, not the in-memory one, so the
    // tables always describe exactly what landed on disk.
    let records = read_records(&csv_path)
        .with_context(|| format!("Failed to re-read {}", csv_path.display()))?;

    let memo_rows = generate_memo_stats(&records);
    println!("{}", render_memo_table(&memo_rows));

    let throughput = if config.deep_dive {
        let report = analyze_throughput(&records);
        println!("{}", render_throughput(&report));
        Some(report)
    } else {
        None
    };

    if config.save_report {
        let report_path = config
            .output_dir
            .join(output_filename(&config.account, timestamp, "txt"));
        let contents = build_report(
            &config.account,
            &args.window_label,
            records.len(),
            &memo_rows,
            throughput.as_ref(),
        );
        write_report(&contents, &report_path)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        println!("Report saved to {}", report_path.display());
    }

    Ok(())
}
