//! Account-related types for the bank simulator
//!
//! This module defines the Account structure, its two kinds (standard and
//! interest-bearing) and the balance operations with their validation rules.

use super::error::BankError;
use rust_decimal::Decimal;

/// Account identifier
///
/// Free-form text chosen by the user at creation time.
pub type AccountId = String;

/// The kind of an account
///
/// Only interest-bearing accounts carry a rate and can accrue interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    /// Plain account: deposit, withdraw, balance
    Standard,

    /// Savings account with a fixed interest rate
    InterestBearing {
        /// Percentage applied on each accrual (5 means 5%)
        rate: Decimal,
    },
}

/// Outcome of a deposit
///
/// Non-positive deposits are ignored rather than rejected, so a deposit
/// either applies or silently does nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Credit {
    /// The amount was added to the balance
    Applied {
        /// Amount credited
        amount: Decimal,
        /// Balance after the credit
        new_balance: Decimal,
    },

    /// The amount was not positive; nothing changed
    Ignored,
}

/// Outcome of an interest accrual
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accrual {
    /// Interest computed from the balance before accrual
    pub interest: Decimal,

    /// What the inner deposit did with the interest
    pub credit: Credit,

    /// Balance after accrual (unchanged when the credit was ignored)
    pub new_balance: Decimal,
}

/// Client account state
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Registry key, immutable after creation
    id: AccountId,

    /// Display name of the owner, immutable after creation
    owner: String,

    /// Current balance
    ///
    /// Never driven negative by a withdrawal. The initial balance is taken
    /// as given, so it can start below zero.
    balance: Decimal,

    /// Standard or interest-bearing, fixed at creation
    kind: AccountKind,
}

impl Account {
    /// Create a standard account
    pub fn standard(id: impl Into<AccountId>, owner: impl Into<String>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            owner: owner.into(),
            balance,
            kind: AccountKind::Standard,
        }
    }

    /// Create an interest-bearing account
    ///
    /// The rate is a percentage and is not validated.
    pub fn interest_bearing(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        balance: Decimal,
        rate: Decimal,
    ) -> Self {
        Account {
            id: id.into(),
            owner: owner.into(),
            balance,
            kind: AccountKind::InterestBearing { rate },
        }
    }

    /// Registry key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owner name
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Interest rate, if this account bears interest
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Standard => None,
            AccountKind::InterestBearing { rate } => Some(rate),
        }
    }

    /// Whether interest accrual is available on this account
    pub fn is_interest_bearing(&self) -> bool {
        matches!(self.kind, AccountKind::InterestBearing { .. })
    }

    /// Deposit funds
    ///
    /// Amounts `<= 0` are ignored: the balance stays the same and no error
    /// is reported.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the new balance cannot be represented.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Credit, BankError> {
        if amount <= Decimal::ZERO {
            return Ok(Credit::Ignored);
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", &self.id))?;

        self.balance = new_balance;

        Ok(Credit::Applied {
            amount,
            new_balance,
        })
    }

    /// Withdraw funds
    ///
    /// Requires `0 < amount <= balance`.
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a non-positive amount or one that exceeds
    /// the balance. The balance is left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO || amount > self.balance {
            return Err(BankError::invalid_amount(&self.id, self.balance, amount));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", &self.id))?;

        self.balance = new_balance;

        Ok(new_balance)
    }

    /// Accrue interest into the balance
    ///
    /// Computes `balance * rate / 100` and runs it through [`Account::deposit`],
    /// so a zero (or negative) interest is silently ignored while the accrual
    /// itself still succeeds.
    ///
    /// Callers gate this on [`AccountRegistry::is_interest_bearing`]. A
    /// standard account has no rate and accrues nothing.
    ///
    /// [`AccountRegistry::is_interest_bearing`]: crate::core::AccountRegistry::is_interest_bearing
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the interest or the new balance overflows
    pub fn add_interest(&mut self) -> Result<Accrual, BankError> {
        let rate = self.interest_rate().unwrap_or(Decimal::ZERO);

        let interest = rate
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|fraction| self.balance.checked_mul(fraction))
            .ok_or_else(|| BankError::arithmetic_overflow("interest", &self.id))?;

        let credit = self.deposit(interest)?;

        Ok(Accrual {
            interest,
            credit,
            new_balance: self.balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_standard_account_has_no_rate() {
        let account = Account::standard("B1", "Bob", Decimal::ZERO);

        assert_eq!(account.id(), "B1");
        assert_eq!(account.owner(), "Bob");
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.interest_rate(), None);
        assert!(!account.is_interest_bearing());
    }

    #[test]
    fn test_interest_bearing_account_keeps_rate() {
        let account = Account::interest_bearing("S1", "Alice", dec("1000"), dec("5"));

        assert_eq!(account.interest_rate(), Some(dec("5")));
        assert!(account.is_interest_bearing());
    }

    #[test]
    fn test_negative_initial_balance_is_accepted() {
        let account = Account::standard("B1", "Bob", dec("-25"));
        assert_eq!(account.balance(), dec("-25"));
    }

    #[rstest]
    #[case::whole(dec("100"), dec("50"), dec("150"))]
    #[case::fraction(dec("0"), dec("0.0001"), dec("0.0001"))]
    #[case::from_negative(dec("-10"), dec("25"), dec("15"))]
    fn test_deposit_positive_amount(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let mut account = Account::standard("B1", "Bob", initial);

        let credit = account.deposit(amount).unwrap();

        assert_eq!(
            credit,
            Credit::Applied {
                amount,
                new_balance: expected
            }
        );
        assert_eq!(account.balance(), expected);
    }

    #[rstest]
    #[case::zero(dec("0"))]
    #[case::negative(dec("-5"))]
    #[case::tiny_negative(dec("-0.0001"))]
    fn test_deposit_non_positive_is_ignored(#[case] amount: Decimal) {
        let mut account = Account::standard("B1", "Bob", dec("100"));

        let credit = account.deposit(amount).unwrap();

        assert_eq!(credit, Credit::Ignored);
        assert_eq!(account.balance(), dec("100"));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = Account::standard("B1", "Bob", Decimal::MAX);

        let result = account.deposit(Decimal::ONE);

        assert!(matches!(result, Err(BankError::ArithmeticOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[rstest]
    #[case::partial(dec("100"), dec("40"), dec("60"))]
    #[case::entire_balance(dec("100"), dec("100"), dec("0"))]
    #[case::fraction(dec("1.5"), dec("0.25"), dec("1.25"))]
    fn test_withdraw_valid_amount(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let mut account = Account::standard("B1", "Bob", initial);

        let new_balance = account.withdraw(amount).unwrap();

        assert_eq!(new_balance, expected);
        assert_eq!(account.balance(), expected);
    }

    #[rstest]
    #[case::exceeds_balance(dec("100"), dec("150"))]
    #[case::zero(dec("100"), dec("0"))]
    #[case::negative(dec("100"), dec("-10"))]
    #[case::empty_account(dec("0"), dec("1"))]
    #[case::negative_balance(dec("-5"), dec("1"))]
    fn test_withdraw_invalid_amount(#[case] initial: Decimal, #[case] amount: Decimal) {
        let mut account = Account::standard("B1", "Bob", initial);

        let result = account.withdraw(amount);

        assert_eq!(
            result,
            Err(BankError::InvalidAmount {
                id: "B1".to_string(),
                balance: initial,
                requested: amount,
            })
        );
        assert_eq!(account.balance(), initial);
    }

    #[rstest]
    #[case::five_percent(dec("1000"), dec("5"), dec("50"), dec("1050"))]
    #[case::fractional_rate(dec("200"), dec("2.5"), dec("5"), dec("205"))]
    #[case::fractional_balance(dec("10.10"), dec("10"), dec("1.01"), dec("11.11"))]
    fn test_add_interest_applies(
        #[case] initial: Decimal,
        #[case] rate: Decimal,
        #[case] interest: Decimal,
        #[case] expected: Decimal,
    ) {
        let mut account = Account::interest_bearing("S1", "Alice", initial, rate);

        let accrual = account.add_interest().unwrap();

        assert_eq!(accrual.interest, interest);
        assert_eq!(
            accrual.credit,
            Credit::Applied {
                amount: interest,
                new_balance: expected
            }
        );
        assert_eq!(accrual.new_balance, expected);
        assert_eq!(account.balance(), expected);
    }

    #[rstest]
    #[case::zero_rate(dec("1000"), dec("0"))]
    #[case::zero_balance(dec("0"), dec("5"))]
    #[case::negative_rate(dec("1000"), dec("-5"))]
    #[case::negative_balance(dec("-100"), dec("5"))]
    fn test_add_interest_non_positive_is_silent(#[case] initial: Decimal, #[case] rate: Decimal) {
        let mut account = Account::interest_bearing("S1", "Alice", initial, rate);

        let accrual = account.add_interest().unwrap();

        assert_eq!(accrual.credit, Credit::Ignored);
        assert_eq!(accrual.new_balance, initial);
        assert_eq!(account.balance(), initial);
    }

    #[test]
    fn test_add_interest_on_standard_account_accrues_nothing() {
        let mut account = Account::standard("B1", "Bob", dec("100"));

        let accrual = account.add_interest().unwrap();

        assert_eq!(accrual.interest, Decimal::ZERO);
        assert_eq!(accrual.credit, Credit::Ignored);
        assert_eq!(account.balance(), dec("100"));
    }

    #[test]
    fn test_add_interest_compounds() {
        let mut account = Account::interest_bearing("S1", "Alice", dec("100"), dec("10"));

        account.add_interest().unwrap();
        account.add_interest().unwrap();

        assert_eq!(account.balance(), dec("121"));
    }
}
