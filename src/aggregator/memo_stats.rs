//! Memo-grouped success/failure statistics.
//!
//! Rows are emitted in a fixed order: the synthetic `TOTAL` and `N/A` groups
//! first, then the distinct memo values in two buckets. Memos containing
//! `"RPC"` denote plain relay submissions and keep their label; every other
//! memo belongs to the priority-relay tag family and gets a cosmetic
//! `" (jito)"` display suffix. Both buckets sort ascending by label.

use crate::parser::ParsedRecord;
use crate::utils::config::NA;
use std::collections::BTreeSet;

/// Display suffix for memos outside the "RPC" tag family
pub const JITO_SUFFIX: &str = " (jito)";

/// Relay-tag marker, matched case-sensitively inside the memo value.
///
/// This is a heuristic keyed to an external naming convention; it is
/// preserved verbatim rather than generalized.
const RPC_MARKER: &str = "RPC";

/// Status value counted as a success
pub const STATUS_SUCCESS: &str = "Success";

/// Status value counted as a failure
pub const STATUS_FAIL: &str = "Fail";

/// One row of the memo statistics table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    /// Display label (memo value, possibly suffixed, or a synthetic group)
    pub label: String,

    /// Records in this group
    pub total: u64,

    /// Records with status exactly "Success"
    pub success: u64,

    /// Records with status exactly "Fail"
    pub fail: u64,

    /// Success rate, formatted "NN.NN%"
    pub success_rate: String,

    /// Fail rate, formatted "NN.NN%"
    pub fail_rate: String,
}

/// Whether a memo belongs to the synthetic `N/A` group
fn is_na_memo(memo: &str) -> bool {
    let trimmed = memo.trim();
    trimmed.is_empty() || trimmed == NA
}

/// Build one row from the records matching `filter`
fn make_row<'a>(
    label: impl Into<String>,
    records: impl Iterator<Item = &'a ParsedRecord>,
) -> AggregateRow {
    let mut total: u64 = 0;
    let mut success: u64 = 0;
    let mut fail: u64 = 0;

    for record in records {
        total += 1;
        match record.status.as_str() {
            STATUS_SUCCESS => success += 1,
            STATUS_FAIL => fail += 1,
            // Anything else counts toward total only.
            _ => {}
        }
    }

    let (success_rate, fail_rate) = if total > 0 {
        (
            format!("{:.2}%", success as f64 / total as f64 * 100.0),
            format!("{:.2}%", fail as f64 / total as f64 * 100.0),
        )
    } else {
        ("0.00%".to_string(), "0.00%".to_string())
    };

    AggregateRow {
        label: label.into(),
        total,
        success,
        fail,
        success_rate,
        fail_rate,
    }
}

/// Compute the full, ordered memo statistics table.
///
/// Every group is computed even when empty; filtering zero-total rows is a
/// display concern (see `output::table`).
pub fn generate_memo_stats(records: &[ParsedRecord]) -> Vec<AggregateRow> {
    let mut rows = vec![
        make_row("TOTAL", records.iter()),
        make_row(NA, records.iter().filter(|r| is_na_memo(&r.memo))),
    ];

    // BTreeSet gives the ascending lexicographic order each bucket needs.
    let memos: BTreeSet<&str> = records
        .iter()
        .map(|r| r.memo.as_str())
        .filter(|m| !is_na_memo(m))
        .collect();

    let (rpc, jito): (Vec<&str>, Vec<&str>) =
        memos.into_iter().partition(|m| m.contains(RPC_MARKER));

    for memo in rpc {
        rows.push(make_row(memo, records.iter().filter(|r| r.memo == memo)));
    }

    // The jito bucket sorts by the display label, suffix included, which
    // can differ from the raw-memo order when a memo contains characters
    // that compare below a space.
    let mut jito: Vec<(String, &str)> = jito
        .into_iter()
        .map(|memo| (format!("{}{}", memo, JITO_SUFFIX), memo))
        .collect();
    jito.sort_by(|a, b| a.0.cmp(&b.0));

    for (label, memo) in jito {
        rows.push(make_row(label, records.iter().filter(|r| r.memo == memo)));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(memo: &str, status: &str) -> ParsedRecord {
        ParsedRecord {
            timestamp: "2024-01-01 00:00:00".to_string(),
            slot: "1".to_string(),
            status: status.to_string(),
            fee: "5000".to_string(),
            compute_unit: "200".to_string(),
            token_name: NA.to_string(),
            token_in: NA.to_string(),
            profit: NA.to_string(),
            memo: memo.to_string(),
            signature: "sig".to_string(),
        }
    }

    #[test]
    fn test_rates_zero_when_empty() {
        let rows = generate_memo_stats(&[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "TOTAL");
        assert_eq!(rows[0].total, 0);
        assert_eq!(rows[0].success_rate, "0.00%");
        assert_eq!(rows[1].label, NA);
    }

    #[test]
    fn test_unknown_status_counts_toward_total_only() {
        let records = vec![
            record("RPC-1", "Success"),
            record("RPC-1", "Timeout"),
            record("RPC-1", "Fail"),
        ];
        let rows = generate_memo_stats(&records);
        let row = rows.iter().find(|r| r.label == "RPC-1").unwrap();
        assert_eq!(row.total, 3);
        assert_eq!(row.success, 1);
        assert_eq!(row.fail, 1);
        assert!(row.success + row.fail <= row.total);
    }

    #[test]
    fn test_blank_memo_joins_na_group() {
        let records = vec![record("  ", "Success"), record(NA, "Fail")];
        let rows = generate_memo_stats(&records);
        assert_eq!(rows[1].label, NA);
        assert_eq!(rows[1].total, 2);
    }

    #[test]
    fn test_jito_bucket_sorts_by_display_label() {
        // "a\u{1}" precedes "a" once both carry the " (jito)" suffix,
        // because \u{1} compares below the space that starts the suffix.
        let records = vec![record("a", "Success"), record("a\u{1}", "Success")];
        let rows = generate_memo_stats(&records);
        let labels: Vec<&str> = rows.iter().skip(2).map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a\u{1} (jito)", "a (jito)"]);
    }

    #[test]
    fn test_bucket_order_rpc_before_jito() {
        let records = vec![
            record("zeta", "Success"),
            record("alpha", "Success"),
            record("RPC-z", "Success"),
            record("RPC-a", "Success"),
        ];
        let rows = generate_memo_stats(&records);
        let labels: Vec<&str> = rows.iter().skip(2).map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["RPC-a", "RPC-z", "alpha (jito)", "zeta (jito)"]);
    }
}
