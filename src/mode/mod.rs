//! Session mode module
//!
//! A session mode decides where commands come from: the interactive menu or
//! a CSV script. Both feed the same `Bank`, which is created once by the
//! caller and passed in, so a mode never owns account state.

use crate::core::Bank;
use crate::io::write_accounts_csv;
use crate::shell::{Renderer, TerminalPrompter};
use crate::types::BankError;
use std::io::Write;
use std::path::Path;

pub mod interactive;
pub mod script;

pub use interactive::InteractiveMode;
pub use script::ScriptMode;

/// Presentation settings shared by both modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Use colors and text styles
    pub styled: bool,
    /// Print the startup banner (interactive mode only)
    pub banner: bool,
    /// Print the account summary once the session ends
    pub summary: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            styled: true,
            banner: true,
            summary: false,
        }
    }
}

/// A source of commands driving one session
pub trait SessionMode {
    /// Run commands against the bank until the session ends
    ///
    /// Notices go to `output`. Domain failures are rendered and the session
    /// continues; only prompt, script or output failures are returned.
    fn run(&mut self, bank: &mut Bank, output: &mut dyn Write) -> Result<(), BankError>;
}

/// Create the session mode for the given script, if any
///
/// With a script path the session replays that file; otherwise it prompts
/// on the terminal.
pub fn create_mode(script: Option<&Path>, config: &SessionConfig) -> Box<dyn SessionMode> {
    let renderer = Renderer::new(config.styled);
    match script {
        Some(path) => Box::new(ScriptMode::new(path, renderer)),
        None => Box::new(InteractiveMode::new(
            TerminalPrompter::new(config.styled),
            renderer,
            config.banner,
        )),
    }
}

/// Run a full session, then print the summary if requested
pub fn run_session(
    bank: &mut Bank,
    mode: &mut dyn SessionMode,
    config: &SessionConfig,
    output: &mut dyn Write,
) -> Result<(), BankError> {
    mode.run(bank, output)?;

    if config.summary {
        write_accounts_csv(&bank.registry().accounts(), output)?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountType, Command};
    use rust_decimal::Decimal;

    /// Mode replaying a fixed list of commands
    struct FixedMode(Vec<Command>);

    impl SessionMode for FixedMode {
        fn run(&mut self, bank: &mut Bank, _output: &mut dyn Write) -> Result<(), BankError> {
            for command in &self.0 {
                bank.process(command);
            }
            Ok(())
        }
    }

    fn open(id: &str) -> Command {
        Command::CreateAccount {
            kind: AccountType::Standard,
            id: id.to_string(),
            owner: "Bob".to_string(),
            initial_balance: Decimal::TEN,
            interest_rate: Decimal::ZERO,
        }
    }

    #[test]
    fn test_run_session_with_summary() {
        let mut bank = Bank::new();
        let mut mode = FixedMode(vec![open("B2"), open("B1")]);
        let config = SessionConfig {
            summary: true,
            ..SessionConfig::default()
        };
        let mut output = Vec::new();

        run_session(&mut bank, &mut mode, &config, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,owner,kind,balance,interest_rate\nB1,Bob,standard,10,\nB2,Bob,standard,10,\n"
        );
    }

    #[test]
    fn test_run_session_without_summary_prints_nothing_extra() {
        let mut bank = Bank::new();
        let mut mode = FixedMode(vec![open("B1")]);
        let mut output = Vec::new();

        run_session(&mut bank, &mut mode, &SessionConfig::default(), &mut output).unwrap();

        assert!(output.is_empty());
        assert_eq!(bank.registry().len(), 1);
    }
}
