//! Per-slot throughput analysis over persisted records.
//!
//! Runs on the records re-read from the CSV (the "deep dive" pass):
//! average transaction rate across the observed time span plus success and
//! failure counts per slot, with two stable top-10 rankings.

use crate::parser::ParsedRecord;
use chrono::NaiveDateTime;
use log::debug;
use std::collections::HashMap;

/// Timestamp layout used by the record parser and the CSV
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How many slots each ranked view keeps
const TOP_SLOTS: usize = 10;

/// Counts for a single slot, keyed by the verbatim slot string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStat {
    pub slot: String,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

/// Throughput summary over one persisted record collection
#[derive(Debug, Clone)]
pub struct ThroughputReport {
    /// Number of records analyzed
    pub record_count: usize,

    /// Seconds between the earliest and latest parseable timestamps
    pub span_seconds: i64,

    /// Average transactions per second
    pub per_second: f64,

    /// Average transactions per minute
    pub per_minute: f64,

    /// Per-slot counts in encounter order
    pub slots: Vec<SlotStat>,
}

impl ThroughputReport {
    /// Top slots by total count, ties in encounter order
    pub fn top_by_total(&self) -> Vec<SlotStat> {
        self.ranked(|s| s.total)
    }

    /// Top slots by success count, ties in encounter order
    pub fn top_by_success(&self) -> Vec<SlotStat> {
        self.ranked(|s| s.success)
    }

    fn ranked(&self, key: impl Fn(&SlotStat) -> u64) -> Vec<SlotStat> {
        let mut ranked = self.slots.clone();
        // sort_by is stable, so ties keep their encounter order.
        ranked.sort_by(|a, b| key(b).cmp(&key(a)));
        ranked.truncate(TOP_SLOTS);
        ranked
    }
}

/// Analyze rate and per-slot breakdown of a record collection.
///
/// A zero time span (single record, or all records sharing one timestamp)
/// is treated as "all in under one second": per-second falls back to the raw
/// count and per-minute to count * 60.
pub fn analyze_throughput(records: &[ParsedRecord]) -> ThroughputReport {
    let record_count = records.len();

    let times: Vec<NaiveDateTime> = records
        .iter()
        .filter_map(|r| NaiveDateTime::parse_from_str(&r.timestamp, TIMESTAMP_FORMAT).ok())
        .collect();

    let span_seconds = match (times.iter().min(), times.iter().max()) {
        (Some(first), Some(last)) => (*last - *first).num_seconds(),
        _ => 0,
    };

    let (per_second, per_minute) = if span_seconds > 0 {
        let span = span_seconds as f64;
        (record_count as f64 / span, record_count as f64 * 60.0 / span)
    } else {
        (record_count as f64, record_count as f64 * 60.0)
    };

    debug!(
        "Throughput: {} records over {}s ({:.2}/s)",
        record_count, span_seconds, per_second
    );

    let mut slots: Vec<SlotStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let i = *index.entry(record.slot.clone()).or_insert_with(|| {
            slots.push(SlotStat {
                slot: record.slot.clone(),
                total: 0,
                success: 0,
                failed: 0,
            });
            slots.len() - 1
        });

        let stat = &mut slots[i];
        stat.total += 1;
        if record.status.eq_ignore_ascii_case("success") {
            stat.success += 1;
        } else {
            stat.failed += 1;
        }
    }

    ThroughputReport {
        record_count,
        span_seconds,
        per_second,
        per_minute,
        slots,
    }
}
