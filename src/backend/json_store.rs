use std::{fs, io, path::{Path, PathBuf}};

use crate::backend::interface::{AccountRepository, BackendError, Result};
use crate::core::AccountStore;

/// Keeps the whole account store in a single JSON document,
/// rewritten from scratch on every save.
pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> BackendError {
        BackendError::Io { path: self.path.clone(), source }
    }

    fn parse(&self, content: &str) -> Result<AccountStore> {
        let parsed: Option<AccountStore> = serde_json::from_str(content)
            .map_err(|source| BackendError::Serialization { path: self.path.clone(), source })?;

        let accounts = match parsed {
            Some(accounts) => accounts,
            None => {
                log::warn!("{} holds no accounts (null document), starting empty", self.path.display());
                AccountStore::new()
            }
        };

        accounts.validate()
            .map_err(|source| BackendError::Inconsistent { path: self.path.clone(), source })?;
        return Ok(accounts);
    }
}

impl AccountRepository for JsonStore {
    fn read(&self) -> Result<AccountStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("{} does not exist yet, starting with no accounts", self.path.display());
                return Ok(AccountStore::new());
            },
            Err(err) => return Err(self.io_error(err))
        };

        let accounts = self.parse(&content)?;
        log::info!("loaded {} account(s) from {}", accounts.len(), self.path.display());
        return Ok(accounts);
    }

    fn save(&self, accounts: &AccountStore) -> Result<()> {
        let content = serde_json::to_string_pretty(accounts)
            .map_err(|source| BackendError::Serialization { path: self.path.clone(), source })?;
        fs::write(&self.path, content).map_err(|err| self.io_error(err))?;

        log::info!("saved {} account(s) to {}", accounts.len(), self.path.display());
        return Ok(());
    }
}
