use pretty_assertions::assert_eq;
use soltx_report::aggregator::{analyze_throughput, generate_memo_stats};
use soltx_report::output::{
    build_report, output_filename, read_records, write_records, write_report,
};
use soltx_report::parser::ParsedRecord;
use std::fs;

fn record(i: usize) -> ParsedRecord {
    ParsedRecord {
        timestamp: format!("2024-06-01 12:00:{:02}", i),
        slot: format!("{}", 100 + i),
        status: if i % 2 == 0 { "Success" } else { "Fail" }.to_string(),
        fee: "5000".to_string(),
        compute_unit: "900".to_string(),
        token_name: "SOL".to_string(),
        token_in: "1.5".to_string(),
        profit: "-0.25".to_string(),
        memo: format!("RPC-{}", i),
        signature: format!("sig-{}", i),
    }
}

#[test]
fn csv_round_trip_preserves_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.csv");

    let records: Vec<ParsedRecord> = (0..25).map(record).collect();
    write_records(&records, &path).unwrap();
    let loaded = read_records(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn csv_header_row_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.csv");

    write_records(&[record(0)], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "Timestamp (UTC),Slot,Status,Fee,Compute Unit,Token Name,Token In,Profit,Memo,Signature"
    );
}

#[test]
fn write_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("csv/out/records.csv");

    write_records(&[record(0)], &nested).unwrap();

    assert!(nested.exists());
}

#[test]
fn writing_to_a_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(write_records(&[record(0)], dir.path()).is_err());
}

#[test]
fn filename_pattern() {
    assert_eq!(
        output_filename("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus", 1_717_243_200, "csv"),
        "parse_9xQeW_1717243200.csv"
    );
}

#[test]
fn report_contains_all_sections() {
    let records: Vec<ParsedRecord> = (0..4).map(record).collect();
    let memo_rows = generate_memo_stats(&records);
    let throughput = analyze_throughput(&records);

    let contents = build_report(
        "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus",
        "30 minutes",
        records.len(),
        &memo_rows,
        Some(&throughput),
    );

    assert!(contents.contains("Account:      9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus"));
    assert!(contents.contains("Time range:   30 minutes"));
    assert!(contents.contains("Transactions: 4"));
    assert!(contents.contains("Memo statistics"));
    assert!(contents.contains("TOTAL"));
    assert!(contents.contains("Slot throughput"));
    assert!(contents.contains("Top 10 slots by total transactions:"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    write_report(&contents, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}
