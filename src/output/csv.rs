//! CSV persistence of parsed records.
//!
//! The header row comes from the serde renames on `ParsedRecord`, so writing
//! N records and reading them back reproduces the same N records in the same
//! field order.

use crate::parser::ParsedRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;

/// Build the output filename for one fetch session.
///
/// Pattern: `parse_<first-5-chars-of-account>_<unix-timestamp>.<ext>`.
pub fn output_filename(account: &str, timestamp: i64, ext: &str) -> String {
    let prefix: String = account.chars().take(5).collect();
    format!("parse_{}_{}.{}", prefix, timestamp, ext)
}

/// Write records to a CSV file, header row included.
///
/// Creates parent directories as needed.
pub fn write_records(
    records: &[ParsedRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Saving {} transactions to {}",
        records.len(),
        output_path.display()
    );

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path).map_err(OutputError::CsvFailed)?;
    for record in records {
        writer.serialize(record).map_err(OutputError::CsvFailed)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Successfully saved transactions to {}", output_path.display());
    Ok(())
}

/// Read records back from a CSV file written by [`write_records`]
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<ParsedRecord>, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading records from: {}", input_path.display());

    let mut reader = csv::Reader::from_path(input_path).map_err(OutputError::CsvFailed)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(OutputError::CsvFailed)?);
    }

    debug!("Loaded {} records", records.len());
    Ok(records)
}

/// Validate that the output path is usable
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin", 1_700_000_000, "csv"),
            "parse_9xQeW_1700000000.csv"
        );
    }

    #[test]
    fn test_output_filename_short_account() {
        assert_eq!(output_filename("abc", 7, "txt"), "parse_abc_7.txt");
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }
}
