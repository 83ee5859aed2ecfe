//! Transaction-history API client and wire types.

pub mod client;
pub mod types;

pub use client::HistoryClient;
pub use types::{HistoryResponse, LatestTransaction, RawTransaction};
