//! Benchmark suite for ledger operations
//!
//! Uses the divan benchmarking framework.
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Covers in-memory transfers between registered accounts and a full replay
//! of an end-to-end fixture.

use bank_ledger::{pipeline, Account, Bank};
use rust_decimal::Decimal;
use std::path::Path;

fn main() {
    divan::main();
}

/// Ping-pong transfers between two registered accounts
#[divan::bench(args = [100, 1_000, 10_000])]
fn transfer_between(n: usize) {
    let mut bank = Bank::new();
    let a = bank.add_account(Account::new("A", Decimal::from(1_000_000)));
    let b = bank.add_account(Account::new("B", Decimal::from(1_000_000)));
    let amount = Decimal::new(12345, 4);

    for i in 0..n {
        let (from, to) = if i % 2 == 0 { (a, b) } else { (b, a) };
        bank.transfer_between(from, to, divan::black_box(amount))
            .expect("Transfer failed");
    }
}

/// Rejected debits leave balances untouched and should stay cheap
#[divan::bench(args = [100, 1_000, 10_000])]
fn rejected_debit(n: usize) {
    let mut account = Account::new("A", Decimal::ONE);
    let amount = Decimal::from(2);

    for _ in 0..n {
        let _ = divan::black_box(account.debit(divan::black_box(amount)));
    }
}

/// Full replay of a fixture through the pipeline
#[divan::bench]
fn replay_fixture() {
    let path = Path::new("tests/fixtures/insufficient_funds/input.csv");
    let mut output = Vec::new();

    pipeline::process(path, None, &mut output).expect("Processing failed");
}
