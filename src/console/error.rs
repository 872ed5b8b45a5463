use thiserror::Error;

use crate::backend::BackendError;
use crate::core::AccountError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Account(#[from] AccountError),
    /// The user typed something that is not a number where an amount was expected.
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    /// Standard input was closed in the middle of a command.
    #[error("input ended")]
    EndOfInput,
    #[error("failed to save accounts")]
    Persist(#[from] BackendError),
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error)
}

impl CommandError {
    /// Recoverable errors are reported to the user and the menu comes back.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Account(_) | Self::InvalidAmount(_))
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
