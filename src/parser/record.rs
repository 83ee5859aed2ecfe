//! Normalization of raw transactions into flat records.
//!
//! Extraction is best-effort: each field independently falls back to the
//! `"N/A"` sentinel when its source path is absent or has the wrong type.
//! A record therefore always carries all ten fields.

use crate::rpc::RawTransaction;
use crate::utils::config::NA;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One normalized transaction, as persisted to CSV.
///
/// Field renames define the CSV header row, so the on-disk layout and the
/// in-memory layout cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    #[serde(rename = "Timestamp (UTC)")]
    pub timestamp: String,

    #[serde(rename = "Slot")]
    pub slot: String,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Fee")]
    pub fee: String,

    #[serde(rename = "Compute Unit")]
    pub compute_unit: String,

    #[serde(rename = "Token Name")]
    pub token_name: String,

    #[serde(rename = "Token In")]
    pub token_in: String,

    #[serde(rename = "Profit")]
    pub profit: String,

    #[serde(rename = "Memo")]
    pub memo: String,

    #[serde(rename = "Signature")]
    pub signature: String,
}

/// Normalize one raw transaction into a `ParsedRecord`
pub fn parse_transaction(tx: &RawTransaction) -> ParsedRecord {
    let timestamp = block_time(tx)
        .and_then(format_block_time)
        .unwrap_or_else(|| NA.to_string());

    let (token_name, token_in, profit) = extract_swap(tx);

    ParsedRecord {
        timestamp,
        slot: field(tx, "/raw/slot"),
        status: field(tx, "/status"),
        fee: field(tx, "/raw/meta/fee"),
        compute_unit: field(tx, "/raw/meta/computeUnitsConsumed"),
        token_name,
        token_in,
        profit,
        memo: extract_memo(tx),
        signature: field(tx, "/signatures/0"),
    }
}

/// Block time of a raw transaction, in unix seconds
pub fn block_time(tx: &RawTransaction) -> Option<i64> {
    tx.pointer("/raw/blockTime").and_then(|v| v.as_i64())
}

/// Format unix seconds as a UTC `YYYY-MM-DD HH:MM:SS` string
fn format_block_time(secs: i64) -> Option<String> {
    let dt = DateTime::from_timestamp(secs, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Read one field by JSON pointer, defaulting to the sentinel
fn field(tx: &RawTransaction, pointer: &str) -> String {
    tx.pointer(pointer)
        .and_then(display_value)
        .unwrap_or_else(|| NA.to_string())
}

/// Render a scalar JSON value for display; non-scalars yield nothing
fn display_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Token symbol, token-in amount and profit from the first swap action.
///
/// Profit is out-amount minus in-amount, computed only when both amounts
/// parse as numbers; any conversion failure yields the sentinel.
fn extract_swap(tx: &RawTransaction) -> (String, String, String) {
    let swapped = tx.pointer("/actions/0/info/tokens_swapped");

    let token_name = swapped
        .and_then(|s| s.pointer("/in/symbol"))
        .and_then(display_value)
        .unwrap_or_else(|| NA.to_string());

    let token_in = swapped
        .and_then(|s| s.pointer("/in/amount"))
        .and_then(display_value)
        .unwrap_or_else(|| NA.to_string());

    let amount_in = swapped
        .and_then(|s| s.pointer("/in/amount"))
        .and_then(numeric_value);
    let amount_out = swapped
        .and_then(|s| s.pointer("/out/amount"))
        .and_then(numeric_value);

    let profit = match (amount_in, amount_out) {
        (Some(inp), Some(out)) => (out - inp).to_string(),
        _ => NA.to_string(),
    };

    (token_name, token_in, profit)
}

/// Parse a JSON value as f64 (numbers directly, strings via parse)
fn numeric_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First non-blank parsed-instruction string, trimmed
fn extract_memo(tx: &RawTransaction) -> String {
    let instructions = tx
        .pointer("/raw/transaction/message/instructions")
        .and_then(|v| v.as_array());

    if let Some(instructions) = instructions {
        for instruction in instructions {
            if let Some(parsed) = instruction.get("parsed").and_then(|v| v.as_str()) {
                let trimmed = parsed.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    NA.to_string()
}
