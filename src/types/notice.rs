//! Notices produced by bank operations
//!
//! The bank never prints. Each processed command yields an ordered list of
//! notices and the shell decides how to show them.

use super::error::BankError;
use rust_decimal::Decimal;

/// Something the user should be told after an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// An account was opened
    AccountCreated,

    /// A deposit was applied
    Deposited { amount: Decimal, new_balance: Decimal },

    /// A withdrawal was applied
    Withdrawn { amount: Decimal, new_balance: Decimal },

    /// Interest accrual finished (emitted even when the interest was zero)
    InterestAdded { new_balance: Decimal },

    /// Balance inquiry result
    Balance { balance: Decimal },

    /// The operation was rejected; nothing changed
    Rejected(BankError),

    /// The session is ending
    Goodbye,
}
