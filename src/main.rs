//! Ramp Ledger CLI
//!
//! Command-line demo driver for the wallet ledger simulation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- > transactions.csv
//! cargo run -- --fast --incoming 3 --settle > transactions.csv
//! cargo run -- --seed 99 --fast > transactions.csv
//! ```
//!
//! The program logs in with the demo credentials, performs a scripted
//! deposit and withdrawal, triggers the requested number of simulated
//! incoming transfers, and writes the resulting transaction history as CSV
//! to stdout. Progress messages and the balance summary go to stderr so the
//! CSV stream stays clean.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (failed operation, I/O error, etc.)

use ramp_ledger::cli;
use ramp_ledger::core::ledger::DEMO_EMAIL;
use ramp_ledger::core::{DemoConfig, SessionRegistry};
use ramp_ledger::io::{write_balances_csv, write_transactions_csv};
use rust_decimal::Decimal;
use std::process;
use std::time::Duration;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create tokio runtime for async execution
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(&args)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the scripted demo session
///
/// Individual operation failures are fatal here: the script is fixed, so
/// any error means the demo cannot produce its output.
async fn run(args: &cli::CliArgs) -> Result<(), String> {
    let mut config = if args.fast {
        DemoConfig::instant()
    } else {
        DemoConfig::default()
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let demo_code = config.demo_code.clone();
    let settle_window = config.confirm_delay_max;

    let registry = SessionRegistry::new();
    let (session_id, session) = registry.create(config);
    eprintln!("{} started", session_id);

    let receipt = session
        .request_code(DEMO_EMAIL)
        .await
        .map_err(|e| e.to_string())?;
    eprintln!("{}", receipt.message);

    let receipt = session
        .verify_code(&demo_code)
        .await
        .map_err(|e| e.to_string())?;
    eprintln!("{}", receipt.message);

    let receipt = session
        .deposit(Decimal::new(1000, 0))
        .await
        .map_err(|e| e.to_string())?;
    eprintln!("{}", receipt.message);

    let receipt = session
        .withdraw("ETH", Decimal::new(25, 2), "123456789", "DEMO0001234")
        .await
        .map_err(|e| e.to_string())?;
    eprintln!("{}", receipt.message);

    for _ in 0..args.incoming {
        let tx = session
            .generate_incoming()
            .await
            .map_err(|e| e.to_string())?;
        eprintln!(
            "incoming {} {} ({}) pending confirmation",
            tx.amount, tx.currency, tx.id
        );
    }

    if args.settle && session.pending_confirmations() > 0 {
        let wait = settle_window + Duration::from_secs(1);
        eprintln!("waiting {}s for confirmations", wait.as_secs());
        tokio::time::sleep(wait).await;
    }

    let user = session.user().await.map_err(|e| e.to_string())?;

    write_transactions_csv(&user.transactions, std::io::stdout().lock())
        .map_err(|e| e.to_string())?;
    write_balances_csv(&user, std::io::stderr().lock()).map_err(|e| e.to_string())?;

    registry.remove(&session_id);
    Ok(())
}
