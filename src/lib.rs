mod core;
pub mod backend;
pub mod config;
pub mod console;

pub use crate::core::{Account, AccountStore, AccountError, AccountResult, Operation, Amount, Money};
pub use crate::core::{account, error, money, store};
pub use crate::backend::{AccountRepository, BackendError, JsonStore};
pub use crate::console::Session;
