//! Commands accepted by the bank
//!
//! A `Command` is one fully collected menu round: the action plus every
//! field the user typed for it. Both the interactive prompts and the script
//! reader produce commands, so the bank only ever sees this type.

use super::account::AccountId;
use rust_decimal::Decimal;
use std::fmt;

/// Account type offered at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Standard account ("Bank Account" in the menu)
    Standard,
    /// Interest-bearing account ("Savings Account" in the menu)
    Savings,
}

impl AccountType {
    /// Both types, in menu order
    pub const ALL: [AccountType; 2] = [AccountType::Standard, AccountType::Savings];

    /// Menu label for this type
    pub fn label(self) -> &'static str {
        match self {
            AccountType::Standard => "Bank Account",
            AccountType::Savings => "Savings Account",
        }
    }

    /// Short machine name, as used in scripts and the summary
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Standard => "standard",
            AccountType::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One operation requested by the user
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a new account (overwrites any account with the same id)
    CreateAccount {
        kind: AccountType,
        id: AccountId,
        owner: String,
        initial_balance: Decimal,
        /// Ignored for standard accounts
        interest_rate: Decimal,
    },

    /// Credit an account
    Deposit { id: AccountId, amount: Decimal },

    /// Debit an account
    Withdraw { id: AccountId, amount: Decimal },

    /// Accrue interest on a savings account
    AddInterest { id: AccountId },

    /// Show an account's balance
    CheckBalance { id: AccountId },

    /// End the session
    Exit,
}
