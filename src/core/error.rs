use thiserror::Error;

use crate::core::money::{Amount, Money};

/// Failures raised by accounts and the account store.
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    /// An account cannot start out in debt.
    #[error("Initial balance cannot be negative: {}", Money(*.0))]
    NegativeInitialBalance(Amount),
    /// Deposits and withdrawals must move a positive amount.
    #[error("{operation} amount must be positive: {}", Money(*.amount))]
    NonPositiveAmount {
        operation: Operation,
        amount: Amount
    },
    #[error("Account number cannot be blank")]
    BlankAccountNumber,
    /// A withdrawal asked for more than the account holds.
    #[error("Insufficient balance: requested {}, available {}", Money(*.requested), Money(*.available))]
    InsufficientFunds {
        requested: Amount,
        available: Amount
    },
    /// The new balance would not fit in an amount.
    #[error("Deposit of {} would overflow the balance of {}", Money(*.requested), Money(*.balance))]
    BalanceOverflow {
        requested: Amount,
        balance: Amount
    },
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),
    /// A stored record broke an invariant, or is filed under the wrong key.
    #[error("Account record {key} is inconsistent: {reason}")]
    Inconsistent {
        key: String,
        reason: String
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Deposit,
    Withdrawal
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal"
        };
        write!(f, "{}", disp)
    }
}

pub type AccountResult<T> = Result<T, AccountError>;
