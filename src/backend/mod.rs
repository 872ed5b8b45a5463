mod json_store;
mod interface;

pub use interface::{AccountRepository, Result, BackendError};
pub use json_store::JsonStore;
