//! CSV format handling for operation records and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Account balance serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, LedgerError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, holder, counterparty, amount.
/// Counterparty is only filled in for transfers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub holder: String,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the type string (case-insensitive) into an OperationType
/// - Parses the amount string into a Decimal, keeping its scale and
///   rejecting amounts that would have to be rounded
/// - Validates that an amount is present
/// - Validates that transfers name a counterparty
///
/// # Errors
///
/// Returns an error describing the first problem found with the record.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, LedgerError> {
    let op_type = match csv_record.op_type.to_lowercase().as_str() {
        "open" => OperationType::Open,
        "credit" => OperationType::Credit,
        "debit" => OperationType::Debit,
        "transfer" => OperationType::Transfer,
        _ => {
            return Err(LedgerError::ParseError {
                line: None,
                message: format!("Invalid operation type '{}'", csv_record.op_type),
            })
        }
    };

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str_exact(amount_str.trim())
                .map_err(|_| LedgerError::invalid_amount(&amount_str))?
        }
        _ => {
            return Err(LedgerError::missing_amount(
                op_type.as_str(),
                &csv_record.holder,
            ))
        }
    };

    let counterparty = csv_record
        .counterparty
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    if op_type == OperationType::Transfer && counterparty.is_none() {
        return Err(LedgerError::missing_counterparty(&csv_record.holder));
    }

    Ok(OperationRecord {
        op_type,
        holder: csv_record.holder,
        counterparty,
        amount: Some(amount),
    })
}

/// Write account balances to CSV format
///
/// Writes accounts in the order given with columns: holder, balance.
/// Balances keep their full precision in plain decimal notation; unset
/// fields are written as empty cells.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["holder", "balance"])?;

    for account in accounts {
        writer.write_record([
            account.holder().unwrap_or_default().to_string(),
            account
                .balance()
                .map(|balance| balance.to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
