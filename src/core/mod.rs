//! Core business logic module
//!
//! This module contains the account-keeping components:
//! - `registry` - In-memory store of all accounts for the session
//! - `bank` - Operations by account id and command processing

pub mod bank;
pub mod registry;

pub use bank::{Bank, Created};
pub use registry::AccountRegistry;
