//! Terminal prompts
//!
//! The interactive session talks to the user only through the `Prompter`
//! trait, so the loop can be driven by a scripted prompter in tests.

use crate::shell::menu::MenuAction;
use crate::types::{AccountType, BankError};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

/// Source of user input for the interactive session
pub trait Prompter {
    /// Ask which menu action to run
    fn select_action(&mut self) -> Result<MenuAction, BankError>;

    /// Ask which kind of account to open
    fn select_account_type(&mut self) -> Result<AccountType, BankError>;

    /// Ask for a line of free text
    fn text(&mut self, prompt: &str) -> Result<String, BankError>;

    /// Ask for a number, re-asking until it parses
    fn amount(&mut self, prompt: &str, default: Option<Decimal>) -> Result<Decimal, BankError>;
}

/// `Prompter` backed by dialoguer widgets on stderr
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
    styled: bool,
}

impl TerminalPrompter {
    /// Create a prompter, colorful or plain
    pub fn new(styled: bool) -> Self {
        let theme: Box<dyn Theme> = if styled {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        TerminalPrompter { theme, styled }
    }
}

impl Prompter for TerminalPrompter {
    fn select_action(&mut self) -> Result<MenuAction, BankError> {
        let items: Vec<String> = MenuAction::ALL
            .iter()
            .map(|action| action.display_label(self.styled))
            .collect();

        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt("🏦 What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        MenuAction::from_index(index).ok_or_else(|| BankError::Prompt {
            message: format!("menu index {} out of range", index),
        })
    }

    fn select_account_type(&mut self) -> Result<AccountType, BankError> {
        let items: Vec<&str> = AccountType::ALL.iter().map(|kind| kind.label()).collect();

        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt("Account type:")
            .items(&items)
            .default(0)
            .interact()?;

        AccountType::ALL
            .get(index)
            .copied()
            .ok_or_else(|| BankError::Prompt {
                message: format!("account type index {} out of range", index),
            })
    }

    fn text(&mut self, prompt: &str) -> Result<String, BankError> {
        let value: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        Ok(value.trim().to_string())
    }

    fn amount(&mut self, prompt: &str, default: Option<Decimal>) -> Result<Decimal, BankError> {
        let mut input = Input::<Decimal>::with_theme(self.theme.as_ref()).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default);
        }

        Ok(input.interact_text()?)
    }
}
