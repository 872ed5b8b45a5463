use pennybank::{AccountRepository, JsonStore, Session, config::{AppConfig, DEFAULT_CONFIG}};

use std::io;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[clap(short, long, value_parser, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
}

fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(config.log_level()?)
        .parse_default_env()
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = AppConfig::read_or_default(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;
    init_logging(&config)?;
    if !config.color {
        colored::control::set_override(false);
    }

    let store = JsonStore::new(&config.data_file);
    let accounts = store.read()
        .with_context(|| format!("refusing to start with unreadable accounts file {}", store.path().display()))?;

    let stdin = io::stdin();
    let session = Session::new(accounts, &store, stdin.lock(), io::stdout());
    let accounts = session.run()?;

    log::info!("exiting with {} account(s) on record", accounts.len());
    Ok(())
}
