mod error;
mod menu;
mod session;

pub use error::{CommandError, CommandResult};
pub use menu::{MenuChoice, MENU};
pub use session::Session;
