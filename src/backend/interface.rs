use std::path::PathBuf;

use thiserror::Error;

use crate::core::{AccountStore, AccountError};

/// Somewhere a whole account store can be read from and saved to.
pub trait AccountRepository {
    fn read(&self) -> Result<AccountStore>;
    fn save(&self, accounts: &AccountStore) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to access accounts file {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    /// The file exists but is not a valid accounts document.
    #[error("malformed accounts file {}", .path.display())]
    Serialization {
        path: PathBuf,
        source: serde_json::Error
    },
    /// The file parsed, but one of its records breaks an account invariant.
    #[error("inconsistent accounts file {}", .path.display())]
    Inconsistent {
        path: PathBuf,
        source: AccountError
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
