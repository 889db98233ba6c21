//! Configuration file handling.
//!
//! The configuration file is stored at `$EXPENSES_HOME/config.json`. It controls how amounts are
//! written and which categories a new ledger starts with. Expenses themselves are never written
//! to disk.

use crate::model::{default_categories, AmountFormat, CategorySeed};
use crate::{utils, Clock, Ledger, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$EXPENSES_HOME` and from there it loads `$EXPENSES_HOME/config.json`, falling
/// back to defaults when there is no such file.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory, if needed, and writes a default `config.json` into it.
    ///
    /// # Errors
    /// - Returns an error if a `config.json` already exists there.
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expenses home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.exists() {
            bail!("A config file already exists at '{}'", config_path.display())
        }
        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Loads `$EXPENSES_HOME/config.json`, or uses the default settings if it does not exist.
    pub async fn load(expenses_home: impl Into<PathBuf>) -> Result<Self> {
        let root = expenses_home.into();
        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path).await?
        } else {
            debug!(
                "No config file at '{}', using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };
        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn amount_format(&self) -> AmountFormat {
        self.config_file.amount_format
    }

    /// The categories a new ledger is seeded with.
    pub fn categories(&self) -> &[CategorySeed] {
        &self.config_file.categories
    }

    /// A fresh, empty ledger seeded from this configuration.
    pub fn ledger(&self, clock: Clock) -> Ledger {
        Ledger::new(self.categories(), clock)
    }
}

/// The serialized form of the configuration file.
///
/// # Example
///
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1,
///   "amount_format": { "dollar": true, "commas": false },
///   "categories": [
///     { "name": "Food", "color": "#FF6B6B", "icon": "fastfood" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// How amounts are written in command output
    #[serde(default)]
    amount_format: AmountFormat,

    /// The categories every new session starts with. Defaults to the five built-ins.
    #[serde(default = "default_categories")]
    categories: Vec<CategorySeed>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            amount_format: AmountFormat::default(),
            categories: default_categories(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, names another application, or has
    /// a newer version than this program understands.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;
        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.config_version <= CONFIG_VERSION,
            "Unsupported config_version {} in config file, the newest known is {}",
            config.config_version,
            CONFIG_VERSION
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}
