pub mod money;
pub mod error;
pub mod account;
pub mod store;

pub use money::{Amount, Money};
pub use error::{AccountError, AccountResult, Operation};
pub use account::Account;
pub use store::AccountStore;
