use clap::Parser;
use std::path::PathBuf;

/// Replay ledger operations and print the resulting balances
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replay ledger operations and print the resulting balances", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Name given to the bank the accounts are registered with
    #[arg(
        long = "bank-name",
        value_name = "NAME",
        help = "Name of the bank holding the accounts (unnamed if omitted)"
    )]
    pub bank_name: Option<String>,

    /// Default log level, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr output: error, warn, info, debug or trace"
    )]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
