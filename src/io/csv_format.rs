//! CSV format handling for session scripts and the account summary
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to commands
//! - Account summary serialization
//!
//! Conversion is pure; the summary writer takes any `Write` sink.

use crate::types::{Account, AccountType, BankError, Command};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Script row structure for deserialization
///
/// Matches the script format with columns: command, id, owner, kind, amount, rate.
/// Every column but `command` is optional since most commands only use a few.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScriptRecord {
    pub command: String,
    pub id: Option<String>,
    pub owner: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<String>,
    pub rate: Option<String>,
}

/// Convert a ScriptRecord to a Command
///
/// This function:
/// - Parses the command name (case-insensitive)
/// - Requires an id for everything except `exit`
/// - Parses amounts into Decimal
/// - Applies the create defaults (standard kind, zero balance, zero rate)
///
/// # Returns
///
/// Result containing either:
/// - Ok(Command) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_script_record(record: ScriptRecord) -> Result<Command, String> {
    let command = record.command.trim().to_lowercase();

    if command == "exit" {
        return Ok(Command::Exit);
    }

    let id = match record.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(format!("'{}' requires an account id", record.command)),
    };

    let amount = parse_amount("amount", record.amount.as_deref())?;

    match command.as_str() {
        "create" => {
            let kind = parse_kind(record.kind.as_deref())?;
            let interest_rate = parse_amount("rate", record.rate.as_deref())?;
            Ok(Command::CreateAccount {
                kind,
                id,
                owner: record.owner.unwrap_or_default().trim().to_string(),
                initial_balance: amount.unwrap_or(Decimal::ZERO),
                interest_rate: interest_rate.unwrap_or(Decimal::ZERO),
            })
        }
        "deposit" => Ok(Command::Deposit {
            amount: amount.ok_or_else(|| format!("deposit to '{}' requires an amount", id))?,
            id,
        }),
        "withdraw" => Ok(Command::Withdraw {
            amount: amount.ok_or_else(|| format!("withdraw from '{}' requires an amount", id))?,
            id,
        }),
        "interest" => Ok(Command::AddInterest { id }),
        "balance" => Ok(Command::CheckBalance { id }),
        _ => Err(format!("Invalid command: '{}'", record.command)),
    }
}

fn parse_amount(field: &str, value: Option<&str>) -> Result<Option<Decimal>, String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Decimal::from_str(value)
            .map(Some)
            .map_err(|_| format!("Invalid {} '{}'", field, value)),
        _ => Ok(None),
    }
}

fn parse_kind(value: Option<&str>) -> Result<AccountType, String> {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        None | Some("") | Some("standard") | Some("bank") => Ok(AccountType::Standard),
        Some("savings") | Some("interest") => Ok(AccountType::Savings),
        Some(other) => Err(format!("Invalid account kind: '{}'", other)),
    }
}

/// Write the account summary in CSV format
///
/// Columns: id, owner, kind, balance, interest_rate.
/// Accounts are sorted by id for deterministic output and amounts are
/// normalized (no trailing zeros).
///
/// # Errors
///
/// Returns `Io` if the output cannot be written
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), BankError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "owner", "kind", "balance", "interest_rate"])
        .map_err(write_error)?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.id().cmp(b.id()));

    for account in sorted_accounts {
        let kind = if account.is_interest_bearing() {
            AccountType::Savings
        } else {
            AccountType::Standard
        };
        writer
            .write_record(&[
                account.id().to_string(),
                account.owner().to_string(),
                kind.as_str().to_string(),
                account.balance().normalize().to_string(),
                account
                    .interest_rate()
                    .map(|rate| rate.normalize().to_string())
                    .unwrap_or_default(),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_error(error: csv::Error) -> BankError {
    BankError::Io {
        message: format!("Failed to write account summary: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(command: &str, id: Option<&str>, amount: Option<&str>) -> ScriptRecord {
        ScriptRecord {
            command: command.to_string(),
            id: id.map(str::to_string),
            amount: amount.map(str::to_string),
            ..Default::default()
        }
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[rstest]
    #[case::deposit("deposit", Command::Deposit { id: "B1".to_string(), amount: Decimal::TEN })]
    #[case::withdraw("withdraw", Command::Withdraw { id: "B1".to_string(), amount: Decimal::TEN })]
    #[case::upper_case("DEPOSIT", Command::Deposit { id: "B1".to_string(), amount: Decimal::TEN })]
    #[case::interest("interest", Command::AddInterest { id: "B1".to_string() })]
    #[case::balance("balance", Command::CheckBalance { id: "B1".to_string() })]
    fn test_convert_script_record_valid(#[case] command: &str, #[case] expected: Command) {
        let result = convert_script_record(record(command, Some("B1"), Some("10")));
        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn test_convert_exit_needs_no_id() {
        assert_eq!(
            convert_script_record(record("exit", None, None)),
            Ok(Command::Exit)
        );
    }

    #[rstest]
    #[case::defaults(None, None, None, AccountType::Standard, "0", "0")]
    #[case::bank_alias(Some("bank"), Some("100"), None, AccountType::Standard, "100", "0")]
    #[case::savings(Some("savings"), Some("1000"), Some("5"), AccountType::Savings, "1000", "5")]
    #[case::interest_alias(Some("Interest"), Some("1"), Some("2.5"), AccountType::Savings, "1", "2.5")]
    #[case::negative_balance(None, Some("-10"), None, AccountType::Standard, "-10", "0")]
    fn test_convert_create(
        #[case] kind: Option<&str>,
        #[case] amount: Option<&str>,
        #[case] rate: Option<&str>,
        #[case] expected_kind: AccountType,
        #[case] expected_balance: &str,
        #[case] expected_rate: &str,
    ) {
        let script_record = ScriptRecord {
            command: "create".to_string(),
            id: Some("S1".to_string()),
            owner: Some(" Alice ".to_string()),
            kind: kind.map(str::to_string),
            amount: amount.map(str::to_string),
            rate: rate.map(str::to_string),
        };

        let result = convert_script_record(script_record);

        assert_eq!(
            result,
            Ok(Command::CreateAccount {
                kind: expected_kind,
                id: "S1".to_string(),
                owner: "Alice".to_string(),
                initial_balance: dec(expected_balance),
                interest_rate: dec(expected_rate),
            })
        );
    }

    #[rstest]
    #[case::invalid_command(record("transfer", Some("B1"), Some("10")), "Invalid command")]
    #[case::missing_id(record("deposit", None, Some("10")), "requires an account id")]
    #[case::blank_id(record("balance", Some("  "), None), "requires an account id")]
    #[case::deposit_missing_amount(record("deposit", Some("B1"), None), "requires an amount")]
    #[case::withdraw_blank_amount(record("withdraw", Some("B1"), Some(" ")), "requires an amount")]
    #[case::invalid_amount(record("deposit", Some("B1"), Some("lots")), "Invalid amount")]
    #[case::invalid_kind(
        ScriptRecord { kind: Some("checking".to_string()), ..record("create", Some("B1"), None) },
        "Invalid account kind"
    )]
    #[case::invalid_rate(
        ScriptRecord { rate: Some("high".to_string()), ..record("create", Some("B1"), None) },
        "Invalid rate"
    )]
    fn test_convert_script_record_errors(
        #[case] script_record: ScriptRecord,
        #[case] expected_error: &str,
    ) {
        let result = convert_script_record(script_record);
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[rstest]
    #[case::empty(vec![], "id,owner,kind,balance,interest_rate\n")]
    #[case::standard(
        vec![Account::standard("B1", "Bob", dec("30.00"))],
        "id,owner,kind,balance,interest_rate\nB1,Bob,standard,30,\n"
    )]
    #[case::savings(
        vec![Account::interest_bearing("S1", "Alice", dec("1050.0"), dec("5"))],
        "id,owner,kind,balance,interest_rate\nS1,Alice,savings,1050,5\n"
    )]
    #[case::sorted_by_id(
        vec![
            Account::standard("C", "Cy", dec("1")),
            Account::standard("A", "Al", dec("2")),
        ],
        "id,owner,kind,balance,interest_rate\nA,Al,standard,2,\nC,Cy,standard,1,\n"
    )]
    #[case::quoted_owner(
        vec![Account::standard("B1", "Bob, Jr.", dec("0.50"))],
        "id,owner,kind,balance,interest_rate\nB1,\"Bob, Jr.\",standard,0.5,\n"
    )]
    fn test_write_accounts_csv(#[case] accounts: Vec<Account>, #[case] expected_output: &str) {
        let refs: Vec<&Account> = accounts.iter().collect();
        let mut output = Vec::new();

        write_accounts_csv(&refs, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), expected_output);
    }
}
