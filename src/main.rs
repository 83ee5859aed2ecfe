//! soltx-report CLI
//!
//! Interactive reporting tool for an account's recent transaction history:
//! pick a look-back window, fetch and normalize the transactions, persist
//! them as CSV and print memo / slot statistics.

use anyhow::Result;
use chrono::Duration;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use soltx_report::commands::{execute_analyze, AnalyzeArgs};
use soltx_report::rpc::HistoryClient;
use soltx_report::utils::config::{prompt_account, Config};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Fixed look-back windows offered by the menu, as (label, minutes)
const TIME_WINDOWS: [(&str, i64); 10] = [
    ("5 minutes", 5),
    ("10 minutes", 10),
    ("20 minutes", 20),
    ("30 minutes", 30),
    ("1 hour", 60),
    ("6 hours", 360),
    ("12 hours", 720),
    ("24 hours", 1440),
    ("48 hours", 2880),
    ("7 days", 10_080),
];

/// soltx-report - transaction-history statistics for Solana accounts
#[derive(Parser, Debug)]
#[command(name = "soltx-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Transaction-history API endpoint URL
    #[arg(long, env = "API_URL")]
    api_url: String,

    /// Network identifier passed to the API
    #[arg(long, env = "NETWORK", default_value = "mainnet-beta")]
    network: String,

    /// Account address to analyze (prompted when omitted)
    #[arg(long, env = "ACCOUNT")]
    account: Option<String>,

    /// API key credential
    #[arg(long, env = "API_KEY")]
    api_key: String,

    /// Run the per-slot throughput deep dive after each fetch
    #[arg(long, env = "DEEP_DIVE")]
    deep_dive: bool,

    /// Persist a text report next to each CSV
    #[arg(long, env = "SAVE_REPORT")]
    report: bool,

    /// Directory for CSV files and reports
    #[arg(long, env = "OUTPUT_DIR", default_value = "csv")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, env = "DEBUG")]
    verbose: bool,
}

fn main() -> Result<()> {
    // .env first, so clap's env-backed arguments see it.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let account = match cli.account {
        Some(account) => account,
        None => prompt_account()?,
    };

    let config = Config {
        api_url: cli.api_url,
        network: cli.network,
        account,
        api_key: cli.api_key,
        deep_dive: cli.deep_dive,
        save_report: cli.report,
        output_dir: cli.output_dir,
    };

    info!("Analysis for account: {}", config.account);

    let client = HistoryClient::new(&config.api_url, &config.network, &config.api_key)?;

    run_menu(&config, &client)
}

/// Interactive menu loop; returns when the user chooses Exit
fn run_menu(config: &Config, client: &HistoryClient) -> Result<()> {
    let stdin = io::stdin();
    let exit_choice = TIME_WINDOWS.len() + 1;

    loop {
        println!("\nChoose a time range for statistics:");
        for (i, (label, _)) in TIME_WINDOWS.iter().enumerate() {
            println!("{}. {}", i + 1, label);
        }
        println!("{}. Exit", exit_choice);

        print!("Enter your choice (1-{}): ", exit_choice);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            break;
        }
        let choice = line.trim();

        if choice == exit_choice.to_string() {
            info!("Exiting the program");
            println!("Exiting the program. Goodbye!");
            break;
        }

        let selected = choice
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=TIME_WINDOWS.len()).contains(n))
            .map(|n| TIME_WINDOWS[n - 1]);

        let Some((label, minutes)) = selected else {
            warn!("Invalid choice: {}", choice);
            println!("Invalid choice. Please try again.");
            continue;
        };

        let args = AnalyzeArgs {
            window: Some(Duration::minutes(minutes)),
            window_label: label.to_string(),
        };

        // Failures are reported and control returns to the menu.
        if let Err(e) = execute_analyze(config, client, &args) {
            warn!("Analysis failed: {:#}", e);
            println!("Analysis failed: {:#}", e);
        }
    }

    Ok(())
}
