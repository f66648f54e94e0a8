//! Replay pipeline
//!
//! Orchestrates a full run: stream records with `OperationReader`, apply them
//! through `LedgerEngine`, then write the final balances with
//! `csv_format::write_accounts_csv`.
//!
//! Malformed rows and rejected operations are logged and skipped; only
//! failures to open the input or write the output abort the run.

use crate::core::{Bank, LedgerEngine};
use crate::io::csv_format::write_accounts_csv;
use crate::io::reader::OperationReader;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Counts gathered during a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Operations applied to the bank
    pub applied: usize,
    /// Operations rejected by the engine
    pub rejected: usize,
    /// Rows that could not be parsed into an operation
    pub malformed: usize,
}

/// Replay `input_path` against a new bank and write its balances to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the output cannot be
/// written. Per-record failures are counted in the summary instead.
pub fn process(
    input_path: &Path,
    bank_name: Option<&str>,
    output: &mut dyn Write,
) -> Result<ReplaySummary, LedgerError> {
    let mut bank = Bank::new();
    if let Some(name) = bank_name {
        bank.set_name(name);
    }
    let mut engine = LedgerEngine::with_bank(bank);
    let mut summary = ReplaySummary::default();

    info!(input = %input_path.display(), "replaying operations");

    let reader = OperationReader::new(input_path)?;
    for result in reader {
        match result {
            Ok(record) => match engine.process(record) {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    summary.rejected += 1;
                    warn!(error = %e, "operation rejected");
                }
            },
            Err(e) => {
                summary.malformed += 1;
                warn!(error = %e, "skipping malformed record");
            }
        }
    }

    write_accounts_csv(engine.accounts(), output)?;

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        accounts = engine.accounts().len(),
        "replay finished"
    );

    Ok(summary)
}
