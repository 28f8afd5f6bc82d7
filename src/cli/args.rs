use crate::mode::SessionConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Simulate basic banking operations in the terminal
#[derive(Parser, Debug)]
#[command(name = "bank-cli")]
#[command(about = "Simulate basic banking operations in the terminal", long_about = None)]
pub struct CliArgs {
    /// Replay a CSV script instead of prompting
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "CSV script with columns command,id,owner,kind,amount,rate"
    )]
    pub script: Option<PathBuf>,

    /// Print all accounts as CSV when the session ends
    #[arg(long = "summary", help = "Print an account summary (CSV) when the session ends")]
    pub summary: bool,

    /// Disable colors and text styles
    #[arg(
        long = "plain",
        env = "BANK_CLI_PLAIN",
        help = "Disable colors and text styles"
    )]
    pub plain: bool,

    /// Skip the startup banner
    #[arg(long = "no-banner", help = "Skip the startup banner")]
    pub no_banner: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    ///
    /// Styling is turned off by `--plain` and always off in script mode,
    /// so replayed output stays free of escape codes.
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            styled: !self.plain && self.script.is_none(),
            banner: !self.no_banner,
            summary: self.summary,
        }
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
