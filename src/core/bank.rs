//! Bank facade
//!
//! This module provides the `Bank` that the session drives. It owns the
//! `AccountRegistry` and exposes every account operation by id.
//!
//! The bank enforces the session rules:
//! - Lookups that miss are reported as `AccountNotFound`
//! - Interest accrual is gated to interest-bearing accounts
//! - Domain failures become `Notice::Rejected`, never a fatal error

use crate::core::registry::AccountRegistry;
use crate::types::{Account, AccountType, Accrual, BankError, Command, Credit, Notice};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Result of opening an account
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    /// Id of the new account
    pub id: String,
    /// An account with the same id existed and was overwritten
    pub replaced: bool,
}

/// Session bank
///
/// Built once at startup and passed by reference to the session mode.
#[derive(Debug, Default)]
pub struct Bank {
    registry: AccountRegistry,
}

impl Bank {
    /// Create a bank with an empty registry
    pub fn new() -> Self {
        Bank {
            registry: AccountRegistry::new(),
        }
    }

    /// Read access to the registry
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Open an account
    ///
    /// Neither the initial balance nor the rate is validated. An existing
    /// account with the same id is overwritten.
    pub fn create_account(
        &mut self,
        kind: AccountType,
        id: &str,
        owner: &str,
        initial_balance: Decimal,
        interest_rate: Option<Decimal>,
    ) -> Created {
        let account = match kind {
            AccountType::Standard => Account::standard(id, owner, initial_balance),
            AccountType::Savings => Account::interest_bearing(
                id,
                owner,
                initial_balance,
                interest_rate.unwrap_or(Decimal::ZERO),
            ),
        };

        let replaced = self.registry.register(account);
        if replaced {
            warn!(id, "existing account overwritten");
        }
        info!(id, owner, kind = kind.as_str(), %initial_balance, "account created");

        Created {
            id: id.to_string(),
            replaced,
        }
    }

    /// Deposit into an account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Credit, BankError> {
        let credit = self.account_mut(id)?.deposit(amount)?;
        debug!(id, %amount, ?credit, "deposit");
        Ok(credit)
    }

    /// Withdraw from an account
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidAmount` if the amount is non-positive or exceeds the balance
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, BankError> {
        let new_balance = self.account_mut(id)?.withdraw(amount)?;
        debug!(id, %amount, %new_balance, "withdrawal");
        Ok(new_balance)
    }

    /// Current balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this id
    pub fn balance(&self, id: &str) -> Result<Decimal, BankError> {
        self.registry
            .lookup(id)
            .map(Account::balance)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    /// Accrue interest on an account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `NotInterestBearing` if the account is a standard account
    pub fn add_interest(&mut self, id: &str) -> Result<Accrual, BankError> {
        let account = self.account_mut(id)?;
        if !AccountRegistry::is_interest_bearing(account) {
            return Err(BankError::not_interest_bearing(id));
        }

        let accrual = account.add_interest()?;
        debug!(
            id,
            interest = %accrual.interest,
            new_balance = %accrual.new_balance,
            "interest accrued"
        );
        Ok(accrual)
    }

    /// Run one command and collect the notices to display
    ///
    /// Domain failures are returned as `Notice::Rejected`; the bank state is
    /// unchanged in that case.
    pub fn process(&mut self, command: &Command) -> Vec<Notice> {
        match self.apply(command) {
            Ok(notices) => notices,
            Err(error) => {
                if error.is_domain() {
                    debug!(%error, "command rejected");
                } else {
                    warn!(%error, "command failed");
                }
                vec![Notice::Rejected(error)]
            }
        }
    }

    fn apply(&mut self, command: &Command) -> Result<Vec<Notice>, BankError> {
        let notices = match command {
            Command::CreateAccount {
                kind,
                id,
                owner,
                initial_balance,
                interest_rate,
            } => {
                self.create_account(*kind, id, owner, *initial_balance, Some(*interest_rate));
                vec![Notice::AccountCreated]
            }
            Command::Deposit { id, amount } => match self.deposit(id, *amount)? {
                Credit::Applied {
                    amount,
                    new_balance,
                } => vec![Notice::Deposited {
                    amount,
                    new_balance,
                }],
                Credit::Ignored => Vec::new(),
            },
            Command::Withdraw { id, amount } => {
                let new_balance = self.withdraw(id, *amount)?;
                vec![Notice::Withdrawn {
                    amount: *amount,
                    new_balance,
                }]
            }
            Command::AddInterest { id } => {
                let accrual = self.add_interest(id)?;
                let mut notices = Vec::with_capacity(2);
                // The inner deposit reports itself before the accrual does.
                if let Credit::Applied {
                    amount,
                    new_balance,
                } = accrual.credit
                {
                    notices.push(Notice::Deposited {
                        amount,
                        new_balance,
                    });
                }
                notices.push(Notice::InterestAdded {
                    new_balance: accrual.new_balance,
                });
                notices
            }
            Command::CheckBalance { id } => vec![Notice::Balance {
                balance: self.balance(id)?,
            }],
            Command::Exit => vec![Notice::Goodbye],
        };

        Ok(notices)
    }

    fn account_mut(&mut self, id: &str) -> Result<&mut Account, BankError> {
        self.registry
            .lookup_mut(id)
            .ok_or_else(|| BankError::account_not_found(id))
    }
}
