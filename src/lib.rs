//! Bank CLI Library
//! # Overview
//!
//! This library provides an interactive banking simulator over an in-memory,
//! non-persistent account registry, with an optional CSV script mode
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Command, Notice, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account storage and lookup
//!   - [`core::bank`] - Operations by account id and command processing
//! - [`io`] - Script parsing and account summary output
//! - [`shell`] - Menu, prompts and notice rendering
//! - [`mode`] - Interactive and script session loops
//!
//! # Operations
//!
//! - **Create Account**: Open a standard or savings account (same id overwrites)
//! - **Deposit**: Credit funds; non-positive amounts are silently ignored
//! - **Withdraw**: Debit funds; requires `0 < amount <= balance`
//! - **Add Interest**: Credit `balance * rate / 100` on savings accounts
//! - **Check Balance**: Show the current balance
//!
//! # Account Kinds
//!
//! - `Standard`: deposit, withdraw, balance
//! - `InterestBearing`: all of the above plus interest accrual at a fixed rate

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod mode;
pub mod shell;
pub mod types;

pub use core::{AccountRegistry, Bank};
pub use io::write_accounts_csv;
pub use types::{Account, AccountId, AccountKind, AccountType, BankError, Command, Notice};
