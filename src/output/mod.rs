//! CSV persistence, console tables and the optional text report.

pub mod csv;
pub mod report;
pub mod table;

pub use csv::{output_filename, read_records, write_records};
pub use report::{build_report, write_report};
pub use table::{render_memo_table, render_throughput};
