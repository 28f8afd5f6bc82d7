//! Interactive session mode
//!
//! One menu round at a time: pick an action, answer its prompts, see the
//! outcome. The round's prompts and the bank operation finish before the
//! menu is shown again. Only the Exit choice ends the loop.

use crate::core::Bank;
use crate::mode::SessionMode;
use crate::shell::{MenuAction, Prompter, Renderer};
use crate::types::{AccountType, BankError, Command, Notice};
use rust_decimal::Decimal;
use std::io::Write;
use tracing::debug;

/// Prompt-driven session
pub struct InteractiveMode<P: Prompter> {
    prompter: P,
    renderer: Renderer,
    banner: bool,
}

impl<P: Prompter> InteractiveMode<P> {
    pub fn new(prompter: P, renderer: Renderer, banner: bool) -> Self {
        InteractiveMode {
            prompter,
            renderer,
            banner,
        }
    }

    /// Ask the prompts belonging to `action` and build the command
    fn collect_command(&mut self, action: MenuAction) -> Result<Command, BankError> {
        let command = match action {
            MenuAction::CreateAccount => {
                let kind = self.prompter.select_account_type()?;
                let id = self.prompter.text("Account number:")?;
                let owner = self.prompter.text("Owner name:")?;
                let initial_balance = self
                    .prompter
                    .amount("Initial balance:", Some(Decimal::ZERO))?;
                let interest_rate = match kind {
                    AccountType::Savings => self
                        .prompter
                        .amount("Interest rate (for Savings Account):", Some(Decimal::ZERO))?,
                    AccountType::Standard => Decimal::ZERO,
                };
                Command::CreateAccount {
                    kind,
                    id,
                    owner,
                    initial_balance,
                    interest_rate,
                }
            }
            MenuAction::Deposit => {
                let id = self.prompter.text("Account number:")?;
                let amount = self.prompter.amount("Amount:", None)?;
                Command::Deposit { id, amount }
            }
            MenuAction::Withdraw => {
                let id = self.prompter.text("Account number:")?;
                let amount = self.prompter.amount("Amount:", None)?;
                Command::Withdraw { id, amount }
            }
            MenuAction::AddInterest => Command::AddInterest {
                id: self.prompter.text("Account number:")?,
            },
            MenuAction::CheckBalance => Command::CheckBalance {
                id: self.prompter.text("Account number:")?,
            },
            MenuAction::Exit => Command::Exit,
        };

        Ok(command)
    }
}

impl<P: Prompter> SessionMode for InteractiveMode<P> {
    fn run(&mut self, bank: &mut Bank, output: &mut dyn Write) -> Result<(), BankError> {
        if self.banner {
            self.renderer.write_banner(output)?;
        }

        loop {
            let action = self.prompter.select_action()?;
            debug!(?action, "menu selection");
            self.renderer.write_separator(output)?;

            let command = self.collect_command(action)?;
            let notices = bank.process(&command);
            self.renderer.write_notices(&notices, output)?;

            if command == Command::Exit {
                break;
            }
            if !ends_round_early(&notices) {
                self.renderer.write_separator(output)?;
            }
        }

        output.flush()?;
        Ok(())
    }
}

/// A round stopped by a lookup miss or the wrong account kind skips its
/// closing separator; the next menu is framed by its own opening one.
fn ends_round_early(notices: &[Notice]) -> bool {
    matches!(
        notices,
        [Notice::Rejected(
            BankError::AccountNotFound { .. } | BankError::NotInterestBearing { .. }
        )]
    )
}
