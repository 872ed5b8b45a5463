use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::error::{AccountError, AccountResult, Operation};
use crate::core::money::{Amount, Money};

/// A single bank account: who owns it, what it holds and
/// everything that ever happened to the balance.
///
/// Field names are kept in PascalCase on disk so that account
/// files written by earlier versions of the program load unchanged.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    account_number: String,
    owner_name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    balance: Amount,
    #[serde(default)]
    transaction_history: Vec<String>
}

impl Account {
    pub fn open(number: &str, owner: &str, initial_balance: Amount) -> AccountResult<Account> {
        if number.trim().is_empty() {
            return Err(AccountError::BlankAccountNumber);
        }
        if initial_balance < Amount::ZERO {
            return Err(AccountError::NegativeInitialBalance(initial_balance));
        }

        let history = vec![
            format!("Account created with initial balance: {}", Money(initial_balance))
        ];
        log::info!("opened account {} for {} with {}", number, owner, Money(initial_balance));

        return Ok(Account {
            account_number: number.to_owned(),
            owner_name: owner.to_owned(),
            balance: initial_balance,
            transaction_history: history
        });
    }

    pub fn number(&self) -> &str {
        &self.account_number
    }

    pub fn owner(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &[String] {
        &self.transaction_history
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn deposit(&mut self, amount: Amount) -> AccountResult<Amount> {
        Self::check_positive(Operation::Deposit, amount)?;

        self.balance = self.balance.checked_add(amount)
            .ok_or(AccountError::BalanceOverflow { requested: amount, balance: self.balance })?;
        self.transaction_history.push(
            format!("Deposited: {}, New Balance: {}", Money(amount), Money(self.balance)));

        log::info!("{}: deposited {}, balance now {}", self.account_number, Money(amount), Money(self.balance));
        return Ok(self.balance);
    }

    /// Takes `amount` off the balance and returns the new balance.
    /// The account is left untouched if it does not hold enough.
    pub fn withdraw(&mut self, amount: Amount) -> AccountResult<Amount> {
        Self::check_positive(Operation::Withdrawal, amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds { requested: amount, available: self.balance });
        }

        self.balance -= amount;
        self.transaction_history.push(
            format!("Withdrew: {}, New Balance: {}", Money(amount), Money(self.balance)));

        log::info!("{}: withdrew {}, balance now {}", self.account_number, Money(amount), Money(self.balance));
        return Ok(self.balance);
    }

    /// Records read back from disk bypass `open`, so they get checked here.
    pub fn check_invariants(&self) -> AccountResult<()> {
        if self.account_number.trim().is_empty() {
            return Err(AccountError::BlankAccountNumber);
        }
        if self.balance < Amount::ZERO {
            return Err(AccountError::Inconsistent {
                key: self.account_number.clone(),
                reason: format!("negative balance {}", self.balance)
            });
        }
        return Ok(());
    }

    fn check_positive(operation: Operation, amount: Amount) -> AccountResult<()> {
        if amount <= Amount::ZERO {
            return Err(AccountError::NonPositiveAmount { operation, amount });
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account: {}, Owner: {}, Balance: {}",
            self.account_number, self.owner_name, Money(self.balance))
    }
}


#[cfg(test)]
mod tests {
    use crate::core::Account;
    use crate::core::error::{AccountError, Operation};

    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[fixture]
    fn alice() -> Account {
        Account::open("A1", "Alice", dec!(100.00)).unwrap()
    }

    #[rstest]
    fn open_records_initial_entry(alice: Account) {
        assert_eq!(alice.number(), "A1");
        assert_eq!(alice.owner(), "Alice");
        assert_eq!(alice.balance(), dec!(100));
        assert_eq!(alice.history(), ["Account created with initial balance: $100.00"]);
    }

    #[rstest]
    fn open_with_zero_balance() {
        let account = Account::open("Z0", "Zed", Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.history().len(), 1);
    }

    #[rstest]
    fn open_rejects_negative_balance() {
        let res = Account::open("A1", "Alice", dec!(-0.01));
        assert_eq!(res, Err(AccountError::NegativeInitialBalance(dec!(-0.01))));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn open_rejects_blank_number(#[case] number: &str) {
        let res = Account::open(number, "Alice", dec!(1));
        assert_eq!(res, Err(AccountError::BlankAccountNumber));
    }

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(50))]
    #[case(dec!(123456.789))]
    fn deposit_adds_exact_amount(mut alice: Account, #[case] amount: Decimal) {
        let before = alice.balance();
        let new_balance = alice.deposit(amount).unwrap();

        assert_eq!(new_balance, before + amount);
        assert_eq!(alice.balance(), before + amount);
        assert_eq!(alice.history().len(), 2);
    }

    #[rstest]
    fn deposit_history_entry(mut alice: Account) {
        alice.deposit(dec!(50.00)).unwrap();
        assert_eq!(alice.history()[1], "Deposited: $50.00, New Balance: $150.00");
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-5))]
    fn deposit_rejects_non_positive(mut alice: Account, #[case] amount: Decimal) {
        let res = alice.deposit(amount);

        assert_eq!(res, Err(AccountError::NonPositiveAmount { operation: Operation::Deposit, amount }));
        assert_eq!(alice.balance(), dec!(100));
        assert_eq!(alice.history().len(), 1);
    }

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(40))]
    #[case(dec!(100))]
    fn withdraw_subtracts_exact_amount(mut alice: Account, #[case] amount: Decimal) {
        let new_balance = alice.withdraw(amount).unwrap();

        assert_eq!(new_balance, dec!(100) - amount);
        assert_eq!(alice.history().len(), 2);
    }

    #[rstest]
    fn withdraw_history_entry(mut alice: Account) {
        alice.withdraw(dec!(25.5)).unwrap();
        assert_eq!(alice.history()[1], "Withdrew: $25.50, New Balance: $74.50");
    }

    #[rstest]
    fn withdraw_more_than_balance(mut alice: Account) {
        let res = alice.withdraw(dec!(100.01));

        assert!(matches!(res, Err(AccountError::InsufficientFunds { .. })));
        assert_eq!(alice.balance(), dec!(100));
        assert_eq!(alice.history().len(), 1);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    fn withdraw_rejects_non_positive(mut alice: Account, #[case] amount: Decimal) {
        let res = alice.withdraw(amount);
        assert_eq!(res, Err(AccountError::NonPositiveAmount { operation: Operation::Withdrawal, amount }));
    }

    #[rstest]
    #[case(Decimal::ONE)]
    #[case(Decimal::MAX)]
    fn deposit_past_the_largest_balance(#[case] amount: Decimal) {
        let mut rich = Account::open("R1", "Rich", Decimal::MAX).unwrap();
        let res = rich.deposit(amount);

        assert_eq!(res, Err(AccountError::BalanceOverflow { requested: amount, balance: Decimal::MAX }));
        assert_eq!(rich.balance(), Decimal::MAX);
        assert_eq!(rich.history().len(), 1);
    }

    #[rstest]
    fn describe(mut alice: Account) {
        alice.deposit(dec!(1100)).unwrap();
        assert_eq!(alice.to_string(), "Account: A1, Owner: Alice, Balance: $1,200.00");
    }

    #[rstest]
    fn error_messages(mut alice: Account) {
        let err = alice.withdraw(dec!(200)).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient balance: requested $200.00, available $100.00");

        let err = alice.deposit(dec!(-2)).unwrap_err();
        assert_eq!(err.to_string(), "Deposit amount must be positive: -$2.00");
    }

    #[rstest]
    fn scenario_deposit_then_overdraw(mut alice: Account) {
        alice.deposit(dec!(50.00)).unwrap();
        assert_eq!(alice.balance(), dec!(150.00));
        assert_eq!(alice.history().len(), 2);

        assert!(alice.withdraw(dec!(200.00)).is_err());
        assert_eq!(alice.balance(), dec!(150.00));
        assert_eq!(alice.history().len(), 2);
    }
}
