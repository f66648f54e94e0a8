//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use bank_ledger::io::reader::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Replaying operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator,
//!   prefixed with the line the record starts on (header is line 1)

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, OperationRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over operation records
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl OperationReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader is configured to trim whitespace from all fields and to
    /// allow flexible field counts, so the trailing counterparty/amount
    /// columns may be omitted.
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it, `ParseError` if the header row cannot be read.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                // quoted fields may span lines, so ask the reader where the record began
                let line = line_of(self.record.position());
                Some(
                    self.record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(|e| format!("Line {}: CSV parse error: {}", line, e))
                        .and_then(|csv_record| {
                            convert_csv_record(csv_record)
                                .map_err(|e| format!("Line {}: {}", line, e))
                        }),
                )
            }
            Err(e) => Some(Err(format!(
                "Line {}: CSV parse error: {}",
                line_of(e.position()),
                e
            ))),
        }
    }
}

fn line_of(position: Option<&csv::Position>) -> String {
    position
        .map(|p| p.line().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationType;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = OperationReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_reader_iterates_all_operation_types() {
        let csv_content = "type,holder,counterparty,amount\n\
            open,Jhon Doe,,2500\n\
            open,Andres,,1500.8989\n\
            transfer,Andres,Jhon Doe,500\n\
            credit,Andres,,1\n\
            debit,Andres,,1\n";
        let file = create_temp_csv(csv_content);

        let reader = OperationReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].op_type, OperationType::Open);
        assert_eq!(records[1].amount, Some(Decimal::new(15008989, 4)));
        assert_eq!(records[2].op_type, OperationType::Transfer);
        assert_eq!(records[2].counterparty.as_deref(), Some("Jhon Doe"));
        assert_eq!(records[3].op_type, OperationType::Credit);
        assert_eq!(records[4].op_type, OperationType::Debit);
    }

    #[test]
    fn test_reader_includes_line_numbers_in_errors() {
        let csv_content = "type,holder,counterparty,amount\n\
            open,Andres,,10\n\
            credit,Andres,,invalid\n\
            debit,Andres,,5\n";
        let file = create_temp_csv(csv_content);

        let reader = OperationReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3")); // Line 3 because of header
        assert!(error.contains("Invalid amount"));
    }

    #[test]
    fn test_reader_line_numbers_count_quoted_newlines() {
        let csv_content = "type,holder,counterparty,amount\n\
            open,\"Jhon\nDoe\",,10\n\
            credit,Andres,,bad\n";
        let file = create_temp_csv(csv_content);

        let reader = OperationReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().holder, "Jhon\nDoe");

        // the quoted holder occupies lines 2 and 3
        let error = records[1].as_ref().unwrap_err();
        assert!(error.starts_with("Line 4:"), "got '{}'", error);
    }

    #[test]
    fn test_reader_handles_whitespace_and_short_rows() {
        let csv_content = "type,holder,counterparty,amount\n  open  ,  Andres  ,  ,  100.0  \n";
        let file = create_temp_csv(csv_content);

        let reader = OperationReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.holder, "Andres");
        assert_eq!(record.counterparty, None);
        assert_eq!(record.amount, Some(Decimal::new(1000, 1)));
    }

    #[test]
    fn test_reader_reports_short_row_without_amount() {
        let csv_content = "type,holder,counterparty,amount\nopen,Andres\n";
        let file = create_temp_csv(csv_content);

        let reader = OperationReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].as_ref().unwrap_err().contains("requires an amount"));
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("type,holder,counterparty,amount\n");

        let reader = OperationReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
