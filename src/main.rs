//! Bank CLI
//!
//! Terminal banking simulator: create accounts, move money, accrue interest.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --plain --no-banner
//! cargo run -- --script session.csv --summary > accounts.csv
//! RUST_LOG=debug cargo run -- --script session.csv
//! ```
//!
//! Without `--script` the program shows an arrow-key menu and prompts for
//! each operation until Exit is chosen. With `--script` the same commands
//! are replayed from a CSV file. Accounts live in memory only and are gone
//! when the process exits.
//!
//! Logs go to stderr so they never mix with the session output on stdout.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally
//! - 1: Error (script not found, terminal unavailable, output not writable, etc.)

use bank_cli::cli;
use bank_cli::mode;
use bank_cli::Bank;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_session_config();
    let mut session = mode::create_mode(args.script.as_deref(), &config);
    let mut bank = Bank::new();

    let mut output = std::io::stdout();
    if let Err(e) = mode::run_session(&mut bank, session.as_mut(), &config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
