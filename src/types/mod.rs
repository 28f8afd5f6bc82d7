//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account model and balance rules
//! - `command`: Operations requested by the user
//! - `notice`: Outcomes to show the user
//! - `error`: Error types for the simulator

pub mod account;
pub mod command;
pub mod error;
pub mod notice;

pub use account::{Account, AccountId, AccountKind, Accrual, Credit};
pub use command::{AccountType, Command};
pub use error::BankError;
pub use notice::Notice;
