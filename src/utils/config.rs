//! Configuration and constants for the CLI.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for history-API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum transactions requested per pagination batch
pub const BATCH_SIZE: usize = 100;

/// Sentinel used for every absent or malformed record field
pub const NA: &str = "N/A";

/// Resolved runtime configuration.
///
/// Resolved once at startup (flag -> environment -> prompt for the account)
/// and passed explicitly to every component; no global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Transaction-history API endpoint URL
    pub api_url: String,

    /// Network identifier passed through to the API (e.g. "mainnet-beta")
    pub network: String,

    /// Account address under analysis
    pub account: String,

    /// API key credential, sent in the `x-api-key` header
    pub api_key: String,

    /// Run the per-slot throughput deep dive after each fetch
    pub deep_dive: bool,

    /// Persist a text report next to the CSV
    pub save_report: bool,

    /// Directory CSV files and reports are written to
    pub output_dir: PathBuf,
}

/// Prompt for the account address on stdin when it was not configured.
///
/// Keeps re-prompting on blank input.
pub fn prompt_account() -> io::Result<String> {
    let stdin = io::stdin();
    loop {
        print!("Please enter the account address: ");
        io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        let account = line.trim();
        if !account.is_empty() {
            return Ok(account.to_string());
        }
    }
}
