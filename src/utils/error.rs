//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the transaction-history API
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur during a fetch session
///
/// A failed pagination batch is NOT represented here: it degrades to a
/// partial result inside the fetcher and is only logged.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not determine the account's latest transaction")]
    LookupFailed,
}

/// Errors that can occur while persisting CSV files or text reports
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
