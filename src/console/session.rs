use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::Colorize;

use crate::backend::AccountRepository;
use crate::console::error::{CommandError, CommandResult};
use crate::console::menu::{MenuChoice, MENU};
use crate::core::{Account, AccountError, AccountStore, Amount, Money};

/// One interactive run of the menu loop.
///
/// The session owns the account store for as long as it runs and hands it
/// back when the user exits. Every command that changes the store is
/// followed by a save through the repository.
pub struct Session<'r, S, R, W> {
    accounts: AccountStore,
    repository: &'r S,
    input: R,
    output: W
}

impl<'r, S, R, W> Session<'r, S, R, W>
where
    S: AccountRepository,
    R: BufRead,
    W: Write
{
    pub fn new(accounts: AccountStore, repository: &'r S, input: R, output: W) -> Self {
        Session { accounts, repository, input, output }
    }

    /// Runs commands until the user picks Exit or input runs out, then
    /// saves one last time. Only persistence and terminal failures end
    /// the loop early.
    pub fn run(mut self) -> CommandResult<AccountStore> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else { break };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };
            log::debug!("menu choice {:?}", choice);

            if choice == MenuChoice::Exit {
                break;
            }

            match self.execute(choice) {
                Ok(()) => {
                    if choice.is_mutating() {
                        self.persist()?;
                    }
                },
                Err(CommandError::EndOfInput) => break,
                Err(err) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err)
            }
        }

        self.persist()?;
        return Ok(self.accounts);
    }

    fn execute(&mut self, choice: MenuChoice) -> CommandResult<()> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::ListAccounts => self.list_accounts(),
            MenuChoice::DeleteAccount => self.delete_account(),
            MenuChoice::QueryBalance => self.query_balance(),
            MenuChoice::Exit => Ok(())
        }
    }

    fn create_account(&mut self) -> CommandResult<()> {
        let number = self.prompt("Enter Account Number: ")?;
        let owner = self.prompt("Enter Owner Name: ")?;
        let initial_balance = self.prompt_amount("Enter Initial Balance: ")?;

        let account = Account::open(&number, &owner, initial_balance)?;
        self.accounts.add(account)?;

        self.confirm("Account created successfully.")
    }

    fn deposit(&mut self) -> CommandResult<()> {
        let number = self.prompt("Enter Account Number: ")?;
        self.accounts.get(&number)?;

        let amount = self.prompt_amount("Enter Deposit Amount: ")?;
        let balance = self.accounts.get_mut(&number)?.deposit(amount)?;

        self.confirm(&format!("Deposited {}. New Balance: {}", Money(amount), Money(balance)))
    }

    fn withdraw(&mut self) -> CommandResult<()> {
        let number = self.prompt("Enter Account Number: ")?;
        self.accounts.get(&number)?;

        let amount = self.prompt_amount("Enter Withdrawal Amount: ")?;
        let balance = self.accounts.get_mut(&number)?.withdraw(amount)?;

        self.confirm(&format!("Withdrew {}. New Balance: {}", Money(amount), Money(balance)))
    }

    fn list_accounts(&mut self) -> CommandResult<()> {
        if self.accounts.is_empty() {
            writeln!(self.output, "No accounts on record.")?;
        }
        for account in self.accounts.list() {
            writeln!(self.output, "{}", account)?;
        }
        Ok(())
    }

    fn delete_account(&mut self) -> CommandResult<()> {
        let number = self.prompt("Enter Account Number to delete: ")?;
        match self.accounts.remove(&number) {
            Some(_) => self.confirm("Account deleted successfully."),
            None => Err(AccountError::NotFound(number).into())
        }
    }

    fn query_balance(&mut self) -> CommandResult<()> {
        let number = self.prompt("Enter Account Number: ")?;
        let account = self.accounts.get(&number)?;

        writeln!(self.output, "Account Balance for {} ({}): {}",
            account.owner(), account.number(), Money(account.balance()))?;
        Ok(())
    }

    fn persist(&mut self) -> CommandResult<()> {
        self.repository.save(&self.accounts)?;
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> CommandResult<()> {
        writeln!(self.output, "{}", message.green())?;
        Ok(())
    }

    fn report(&mut self, err: &CommandError) -> CommandResult<()> {
        log::debug!("command failed: {:?}", err);
        writeln!(self.output, "{}", format!("Error: {}", err).as_str().red())?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> CommandResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()?.ok_or(CommandError::EndOfInput)
    }

    fn prompt_amount(&mut self, label: &str) -> CommandResult<Amount> {
        let text = self.prompt(label)?;
        // thousands separators are accepted, as in `1,000.50`
        Amount::from_str(&text.replace(',', "")).map_err(|_| CommandError::InvalidAmount(text))
    }

    fn read_line(&mut self) -> CommandResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
