use chrono::Duration;
use serde_json::json;
use soltx_report::commands::{execute_analyze, AnalyzeArgs};
use soltx_report::fetch::TransactionSource;
use soltx_report::output::read_records;
use soltx_report::rpc::{LatestTransaction, RawTransaction};
use soltx_report::utils::config::Config;
use soltx_report::utils::error::RpcError;
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// In-memory transaction source replaying scripted batches
struct FakeSource {
    latest: Option<LatestTransaction>,
    batches: RefCell<Vec<Vec<RawTransaction>>>,
}

impl TransactionSource for FakeSource {
    fn latest_transaction(&self, _account: &str) -> Result<Option<LatestTransaction>, RpcError> {
        Ok(self.latest.clone())
    }

    fn transactions_before(
        &self,
        _account: &str,
        _before: &str,
        _limit: usize,
    ) -> Result<Vec<RawTransaction>, RpcError> {
        let mut batches = self.batches.borrow_mut();
        if batches.is_empty() {
            return Ok(Vec::new());
        }
        Ok(batches.remove(0))
    }
}

fn tx(signature: &str, block_time: i64, memo: &str) -> RawTransaction {
    json!({
        "signatures": [signature],
        "status": "Success",
        "raw": {
            "blockTime": block_time,
            "slot": 42,
            "meta": { "fee": 5000, "computeUnitsConsumed": 300 },
            "transaction": { "message": { "instructions": [ { "parsed": memo } ] } }
        }
    })
}

fn config(output_dir: &Path, deep_dive: bool, save_report: bool) -> Config {
    Config {
        api_url: "http://localhost/history".to_string(),
        network: "mainnet-beta".to_string(),
        account: "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus".to_string(),
        api_key: "key".to_string(),
        deep_dive,
        save_report,
        output_dir: output_dir.to_path_buf(),
    }
}

fn args(seconds: i64) -> AnalyzeArgs {
    AnalyzeArgs {
        window: Some(Duration::seconds(seconds)),
        window_label: format!("{} seconds", seconds),
    }
}

#[test]
fn empty_window_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    // History exists, but every transaction predates the 100s window.
    let source = FakeSource {
        latest: Some(LatestTransaction {
            signature: "L".to_string(),
            block_time: 1000,
        }),
        batches: RefCell::new(vec![vec![tx("old", 100, "RPC-x")]]),
    };

    execute_analyze(&config(dir.path(), true, true), &source, &args(100)).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_lookup_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = FakeSource {
        latest: None,
        batches: RefCell::new(vec![]),
    };

    execute_analyze(&config(dir.path(), false, false), &source, &args(100)).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn successful_pass_persists_csv_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let source = FakeSource {
        latest: Some(LatestTransaction {
            signature: "L".to_string(),
            block_time: 1000,
        }),
        batches: RefCell::new(vec![vec![tx("b", 990, "RPC-x"), tx("c", 950, "other")]]),
    };

    execute_analyze(&config(dir.path(), true, true), &source, &args(100)).unwrap();

    let mut csv_files = Vec::new();
    let mut txt_files = Vec::new();
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => csv_files.push(path),
            Some("txt") => txt_files.push(path),
            _ => panic!("unexpected file: {}", path.display()),
        }
    }
    assert_eq!(csv_files.len(), 1);
    assert_eq!(txt_files.len(), 1);

    let name = csv_files[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("parse_9xQeW_"));

    let records = read_records(&csv_files[0]).unwrap();
    assert_eq!(records.len(), 2);
    // Chronological order.
    assert_eq!(records[0].signature, "c");
    assert_eq!(records[1].signature, "b");

    let report = fs::read_to_string(&txt_files[0]).unwrap();
    assert!(report.contains("Time range:   100 seconds"));
    assert!(report.contains("RPC-x"));
    assert!(report.contains("other (jito)"));
}
