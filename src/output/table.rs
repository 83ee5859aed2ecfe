//! Grid-style console tables.
//!
//! Plain-text rendering shared by stdout and the optional text report. The
//! layout mirrors a classic bordered grid: `-` separators between rows and a
//! `=` rule under the header.

use crate::aggregator::{AggregateRow, ThroughputReport};

/// Header of the memo statistics table
const MEMO_HEADERS: [&str; 6] = ["Memo Type", "Total", "Success", "Fail", "Success %", "Fail %"];

/// Header of the per-slot tables
const SLOT_HEADERS: [&str; 4] = ["Slot", "Total", "Success", "Failed"];

/// Render the memo statistics table.
///
/// Rows with a zero total are filtered here, at display time only.
pub fn render_memo_table(rows: &[AggregateRow]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .filter(|row| row.total > 0)
        .map(|row| {
            vec![
                row.label.clone(),
                row.total.to_string(),
                row.success.to_string(),
                row.fail.to_string(),
                row.success_rate.clone(),
                row.fail_rate.clone(),
            ]
        })
        .collect();

    render_grid(&MEMO_HEADERS, &body)
}

/// Render the full throughput section: average rates plus the two top-10
/// slot tables.
pub fn render_throughput(report: &ThroughputReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Transactions analyzed: {} over {} seconds\n",
        report.record_count, report.span_seconds
    ));
    out.push_str(&format!(
        "Average rate: {:.2} tx/min ({:.2} tx/sec)\n",
        report.per_minute, report.per_second
    ));

    out.push_str("\nTop 10 slots by total transactions:\n");
    out.push_str(&render_slot_table(&report.top_by_total()));

    out.push_str("\nTop 10 slots by successful transactions:\n");
    out.push_str(&render_slot_table(&report.top_by_success()));

    out
}

fn render_slot_table(slots: &[crate::aggregator::SlotStat]) -> String {
    let body: Vec<Vec<String>> = slots
        .iter()
        .map(|s| {
            vec![
                s.slot.clone(),
                s.total.to_string(),
                s.success.to_string(),
                s.failed.to_string(),
            ]
        })
        .collect();

    render_grid(&SLOT_HEADERS, &body)
}

/// Render a bordered grid table
fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, width) in widths.iter().copied().enumerate() {
            let empty = String::new();
            let cell = cells.get(i).unwrap_or(&empty);
            line.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push_str(&format_row(&header_cells));
    out.push_str(&rule('='));
    for row in rows {
        out.push_str(&format_row(row));
        out.push_str(&rule('-'));
    }
    out
}
