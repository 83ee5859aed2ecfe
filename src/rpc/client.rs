//! HTTP client for the transaction-history API endpoint.

use super::types::{HistoryResponse, LatestTransaction, RawTransaction};
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::RpcError;
use log::debug;
use reqwest::blocking::Client;

/// Blocking client for the account transaction-history endpoint
pub struct HistoryClient {
    client: Client,
    api_url: String,
    network: String,
    api_key: String,
}

impl HistoryClient {
    /// Create a new history client
    pub fn new(
        api_url: impl Into<String>,
        network: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            network: network.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the account's single most recent transaction.
    ///
    /// Returns `None` when the account has no history or the response does
    /// not carry a usable signature/block-time pair.
    pub fn latest_transaction(
        &self,
        account: &str,
    ) -> Result<Option<LatestTransaction>, RpcError> {
        debug!("Fetching latest transaction for account: {}", account);

        let batch = self.request_history(account, 1, None)?;
        let Some(tx) = batch.first() else {
            return Ok(None);
        };

        let signature = tx
            .pointer("/signatures/0")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let block_time = tx.pointer("/raw/blockTime").and_then(|v| v.as_i64());

        match (signature, block_time) {
            (Some(signature), Some(block_time)) => {
                debug!(
                    "Latest transaction signature: {}, block time: {}",
                    signature, block_time
                );
                Ok(Some(LatestTransaction {
                    signature,
                    block_time,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Fetch up to `limit` transactions strictly older than `before`.
    ///
    /// Transactions come back newest-first.
    pub fn transactions_before(
        &self,
        account: &str,
        before: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, RpcError> {
        self.request_history(account, limit, Some(before))
    }

    /// Issue one GET against the history endpoint
    fn request_history(
        &self,
        account: &str,
        tx_num: usize,
        before: Option<&str>,
    ) -> Result<Vec<RawTransaction>, RpcError> {
        let tx_num = tx_num.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("network", self.network.as_str()),
            ("account", account),
            ("tx_num", tx_num.as_str()),
            ("enable_raw", "true"),
            ("enable_events", "true"),
        ];
        if let Some(before) = before {
            query.push(("before_tx_signature", before));
        }

        debug!("GET {} (before: {:?})", self.api_url, before);

        let response = self
            .client
            .get(&self.api_url)
            .header("x-api-key", &self.api_key)
            .query(&query)
            .send()
            .map_err(RpcError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::BadStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let envelope: HistoryResponse = response.json().map_err(RpcError::RequestFailed)?;

        if let Some(false) = envelope.success {
            return Err(RpcError::InvalidResponse(
                envelope
                    .message
                    .unwrap_or_else(|| "API reported failure".to_string()),
            ));
        }

        Ok(envelope.result.unwrap_or_default())
    }
}
