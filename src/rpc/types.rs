//! Types for the transaction-history API.
//!
//! The endpoint returns an envelope with a `result` list of transaction
//! objects, newest-first. Individual transactions stay opaque
//! `serde_json::Value`s: their exact shape varies with the indexer version,
//! so field extraction is handled best-effort by the record parser.

use serde::Deserialize;

/// Raw transaction object as returned by the API (opaque, parsed later)
pub type RawTransaction = serde_json::Value;

/// Response envelope for the transaction-history endpoint
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub message: Option<String>,

    /// Transactions, newest-first. Absent on error responses.
    #[serde(default)]
    pub result: Option<Vec<RawTransaction>>,
}

/// Signature and block time of an account's most recent transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestTransaction {
    pub signature: String,
    pub block_time: i64,
}
