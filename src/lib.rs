//! soltx-report
//!
//! Transaction-history reporting for Solana accounts: fetches an account's
//! recent transactions from an indexing API, normalizes them into flat
//! records, persists them as CSV, and produces memo-grouped success/failure
//! statistics plus per-slot throughput statistics.
//!
//! This crate provides the core implementation for the `soltx-report` CLI
//! tool.

pub mod aggregator;
pub mod commands;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod rpc;
pub mod utils;
