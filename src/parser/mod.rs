//! Raw-transaction normalization.

pub mod record;

pub use record::{block_time, parse_transaction, ParsedRecord};
