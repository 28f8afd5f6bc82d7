//! Error types for the bank simulator
//!
//! This module defines every error that can occur while running a session.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Domain Errors**: Account not found, invalid withdrawal amount, wrong account kind
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Session Errors**: Terminal prompt failures, script file I/O and parsing
//!
//! Domain errors never end a session. They are turned into notices and the
//! loop carries on with the next selection.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank simulator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// No account is registered under the requested id
    ///
    /// This is an expected outcome, not an exceptional one.
    #[error("Account '{id}' not found")]
    AccountNotFound {
        /// The id that was looked up
        id: String,
    },

    /// Withdrawal amount is non-positive or exceeds the balance
    ///
    /// The balance is left unchanged.
    #[error("Invalid withdrawal of {requested} from account '{id}' (balance {balance})")]
    InvalidAmount {
        /// Account id
        id: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Interest accrual was requested on a standard account
    #[error("Account '{id}' does not bear interest")]
    NotInterestBearing {
        /// Account id
        id: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} for account '{id}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        id: String,
    },

    /// Script file not found at the specified path
    #[error("Script not found: {path}")]
    ScriptNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Interactive prompt failed (terminal closed, not a tty, ...)
    #[error("Prompt error: {message}")]
    Prompt {
        /// Description of the prompt failure
        message: String,
    },

    /// A script row could not be parsed
    ///
    /// Recoverable: the row is skipped and the script continues.
    #[error("Script parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<dialoguer::Error> for BankError {
    fn from(error: dialoguer::Error) -> Self {
        BankError::Prompt {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        BankError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(id: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InvalidAmount {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create a NotInterestBearing error
    pub fn not_interest_bearing(id: &str) -> Self {
        BankError::NotInterestBearing { id: id.to_string() }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether this error belongs to the domain taxonomy
    ///
    /// Domain errors are shown to the user and the session continues.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            BankError::AccountNotFound { .. }
                | BankError::InvalidAmount { .. }
                | BankError::NotInterestBearing { .. }
                | BankError::ArithmeticOverflow { .. }
        )
    }
}
