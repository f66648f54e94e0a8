//! Bank Ledger CLI
//!
//! Replays ledger operations from a CSV file and prints the final balances.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > balances.csv
//! cargo run -- --bank-name "Banco del Estado" --log-level info operations.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use bank_ledger::{cli, logging, pipeline};
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::init(args.log_level.as_directive());

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(&args.input_file, args.bank_name.as_deref(), &mut output) {
        tracing::error!(error = %e, "replay aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
