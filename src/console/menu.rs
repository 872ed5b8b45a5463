pub const MENU: &str = "\nMenu:
1. Create Account
2. Deposit
3. Withdraw
4. View All Accounts
5. Delete Account
6. Bank Balance
7. Exit
Choose an option: ";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    ListAccounts,
    DeleteAccount,
    QueryBalance,
    Exit
}

impl MenuChoice {
    /// Maps a line typed at the menu prompt to a choice; `None` for anything else.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let choice = match input.trim() {
            "1" => Self::CreateAccount,
            "2" => Self::Deposit,
            "3" => Self::Withdraw,
            "4" => Self::ListAccounts,
            "5" => Self::DeleteAccount,
            "6" => Self::QueryBalance,
            "7" => Self::Exit,
            _ => return None
        };
        Some(choice)
    }

    /// Whether a successful run of this command changes the store.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::CreateAccount | Self::Deposit | Self::Withdraw | Self::DeleteAccount)
    }
}
