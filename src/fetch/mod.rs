//! Paginated time-window transaction fetching.
//!
//! The fetcher walks an account's history backward in time, batch by batch,
//! keeps every transaction whose block time falls inside the requested
//! window, and stops as soon as it crosses the window's lower boundary
//! (batches are time-ordered newest-first, so nothing older can follow).

use crate::parser::{block_time, parse_transaction, ParsedRecord};
use crate::rpc::{HistoryClient, LatestTransaction, RawTransaction};
use crate::utils::config::BATCH_SIZE;
use crate::utils::error::{FetchError, RpcError};
use chrono::Duration;
use log::{debug, info, warn};

/// Source of an account's transaction history.
///
/// Implemented by [`HistoryClient`]; tests substitute in-memory fakes.
pub trait TransactionSource {
    /// The account's most recent transaction, if any
    fn latest_transaction(&self, account: &str) -> Result<Option<LatestTransaction>, RpcError>;

    /// Up to `limit` transactions strictly older than `before`, newest-first
    fn transactions_before(
        &self,
        account: &str,
        before: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, RpcError>;
}

impl TransactionSource for HistoryClient {
    fn latest_transaction(&self, account: &str) -> Result<Option<LatestTransaction>, RpcError> {
        HistoryClient::latest_transaction(self, account)
    }

    fn transactions_before(
        &self,
        account: &str,
        before: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, RpcError> {
        HistoryClient::transactions_before(self, account, before, limit)
    }
}

/// Result of one fetch session
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Parsed records in chronological order (oldest first)
    pub records: Vec<ParsedRecord>,

    /// Number of API calls made, probe included
    pub api_calls: u32,
}

/// Fetch and parse all transactions inside the look-back window.
///
/// `window` of `None` means unbounded ("all history"). The window is
/// anchored at the account's latest block time, not at wall-clock now, and
/// both bounds are inclusive.
///
/// # Errors
/// [`FetchError::LookupFailed`] when the latest-transaction probe fails or
/// the account has no history. A failed batch request mid-pagination is not
/// an error: accumulation stops and the partial result is returned.
pub fn fetch_records(
    source: &impl TransactionSource,
    account: &str,
    window: Option<Duration>,
) -> Result<FetchOutcome, FetchError> {
    let mut api_calls: u32 = 1;
    let latest = match source.latest_transaction(account) {
        Ok(Some(latest)) => latest,
        Ok(None) => return Err(FetchError::LookupFailed),
        Err(e) => {
            warn!("Latest-transaction probe failed: {}", e);
            return Err(FetchError::LookupFailed);
        }
    };

    let end_time = latest.block_time;
    let start_time = match window {
        Some(window) => end_time - window.num_seconds(),
        None => i64::MIN,
    };
    debug!(
        "Fetching transactions with block time in [{}, {}]",
        start_time, end_time
    );

    let mut records: Vec<ParsedRecord> = Vec::new();
    let mut cursor = latest.signature;
    let mut crossed_boundary = false;

    while !crossed_boundary {
        api_calls += 1;
        debug!("API call #{}, before_tx_signature: {}", api_calls, cursor);

        let batch = match source.transactions_before(account, &cursor, BATCH_SIZE) {
            Ok(batch) => batch,
            Err(e) => {
                // Graceful degradation: keep what we have.
                warn!("Batch request failed, stopping pagination: {}", e);
                break;
            }
        };

        if batch.is_empty() {
            debug!("No more transactions to fetch");
            break;
        }
        debug!("Fetched {} transactions in this batch", batch.len());

        for tx in &batch {
            let Some(tx_time) = block_time(tx) else {
                // No block time: the transaction can neither be
                // window-checked nor ordered. Skip it.
                continue;
            };
            if tx_time < start_time {
                crossed_boundary = true;
                break;
            }
            if tx_time <= end_time {
                records.push(parse_transaction(tx));
            }
        }

        if !crossed_boundary {
            let Some(next) = batch
                .last()
                .and_then(|tx| tx.pointer("/signatures/0"))
                .and_then(|v| v.as_str())
            else {
                warn!("Last transaction in batch has no signature, stopping");
                break;
            };
            cursor = next.to_string();
        }
    }

    // Pagination walks backward in time, so accumulation is newest-first.
    records.reverse();

    info!("Total API calls made: {}", api_calls);
    info!("Total transactions fetched: {}", records.len());

    Ok(FetchOutcome { records, api_calls })
}
