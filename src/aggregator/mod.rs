//! Statistics over parsed records.

pub mod memo_stats;
pub mod slot_stats;

pub use memo_stats::{generate_memo_stats, AggregateRow};
pub use slot_stats::{analyze_throughput, SlotStat, ThroughputReport};
