//! Notice rendering and the startup banner

use crate::types::{BankError, Notice};
use dialoguer::console::Style;
use rust_decimal::Decimal;
use std::io::Write;

const BANNER: [&str; 6] = [
    r" ____                    _        ____   _      ___ ",
    r"| __ )   __ _  _ __    | | __   / ___| | |    |_ _|",
    r"|  _ \  / _` || '_ \   | |/ /  | |     | |     | | ",
    r"| |_) || (_| || | | |  |   <   | |___  | |___  | | ",
    r"|____/  \__,_||_| |_|  |_|\_\   \____| |_____||___|",
    r"",
];

const SEPARATOR: &str = "=========================";

/// Turns notices into terminal lines
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Renderer { styled }
    }

    /// Message text for a notice, without styling
    pub fn message(notice: &Notice) -> String {
        match notice {
            Notice::AccountCreated => "✅ Account created successfully.".to_string(),
            Notice::Deposited {
                amount,
                new_balance,
            } => format!(
                "💰 {} deposited. New balance: {}",
                format_amount(*amount),
                format_amount(*new_balance)
            ),
            Notice::Withdrawn {
                amount,
                new_balance,
            } => format!(
                "💸 {} withdrawn. New balance: {}",
                format_amount(*amount),
                format_amount(*new_balance)
            ),
            Notice::InterestAdded { new_balance } => {
                format!("📈 Interest added. New balance: {}", format_amount(*new_balance))
            }
            Notice::Balance { balance } => format!("💼 Balance: {}", format_amount(*balance)),
            Notice::Rejected(error) => format!("❌ {}", rejection(error)),
            Notice::Goodbye => "👋 Goodbye!".to_string(),
        }
    }

    /// Notice as it should be printed
    pub fn render(&self, notice: &Notice) -> String {
        let message = Self::message(notice);
        if !self.styled {
            return message;
        }

        let style = match notice {
            Notice::AccountCreated | Notice::Deposited { .. } | Notice::Withdrawn { .. } => {
                Style::new().green().bright().bold()
            }
            Notice::InterestAdded { .. } => Style::new().blue().bright().italic(),
            Notice::Balance { .. } => Style::new().blue().bright().underlined(),
            Notice::Rejected(_) => Style::new().red().bright().bold(),
            Notice::Goodbye => Style::new().yellow().bright().bold().underlined(),
        };
        style.apply_to(message).to_string()
    }

    /// Write every notice on its own line
    pub fn write_notices(&self, notices: &[Notice], output: &mut dyn Write) -> std::io::Result<()> {
        for notice in notices {
            writeln!(output, "{}", self.render(notice))?;
        }
        Ok(())
    }

    /// Write the round separator, framed by blank lines
    pub fn write_separator(&self, output: &mut dyn Write) -> std::io::Result<()> {
        let line = if self.styled {
            Style::new().cyan().bright().apply_to(SEPARATOR).to_string()
        } else {
            SEPARATOR.to_string()
        };
        writeln!(output, "\n{}\n", line)
    }

    /// Write the startup banner
    pub fn write_banner(&self, output: &mut dyn Write) -> std::io::Result<()> {
        let palette = [
            Style::new().red(),
            Style::new().yellow(),
            Style::new().green(),
            Style::new().cyan(),
            Style::new().blue(),
            Style::new().magenta(),
        ];

        for (line, style) in BANNER.iter().zip(palette.iter()) {
            if self.styled {
                writeln!(output, "{}", style.apply_to(line))?;
            } else {
                writeln!(output, "{}", line)?;
            }
        }
        Ok(())
    }
}

fn rejection(error: &BankError) -> String {
    match error {
        BankError::AccountNotFound { .. } => "Account not found.".to_string(),
        BankError::InvalidAmount { .. } => {
            "Withdrawal amount is invalid or exceeds balance.".to_string()
        }
        BankError::NotInterestBearing { .. } => "This is not a savings account.".to_string(),
        other => other.to_string(),
    }
}

/// Format an amount the way notices do
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
