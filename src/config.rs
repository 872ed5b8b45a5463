use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};
use log::LevelFilter;

pub const DEFAULT_CONFIG: &str = "pennybank.toml";
const DEFAULT_DATA_FILE: &str = "accounts.json";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where the accounts are persisted
    pub data_file: PathBuf,
    /// Colorize confirmations and errors
    pub color: bool,
    log_level: String
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            color: true,
            log_level: "warn".to_owned()
        }
    }
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config: AppConfig = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        config.log_level()?;
        return Ok(config);
    }

    /// Like `read`, but a config file that does not exist just means defaults.
    pub fn read_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        if !filepath.as_ref().exists() {
            return Ok(AppConfig::default());
        }
        Self::read(filepath)
    }

    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        self.log_level.parse()
            .with_context(|| format!("invalid log level `{}`", self.log_level))
    }
}
