//! These structs provide the CLI interface for the expenses program, along with the argument
//! types shared by the commands and the MCP tools.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: a small expense ledger you talk to through MCP.
///
/// Expenses and categories live in memory for as long as the program runs; nothing is saved
/// when it exits. The mcp subcommand lets an AI agent, or any other MCP client, record, edit and
/// delete expenses, manage categories and read weekly and monthly totals.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory and write a default config.json into it.
    ///
    /// Edit the file afterwards to change the starting categories or how amounts are written.
    /// Running without a config.json is fine too; the defaults are used.
    Init,
    /// Run an MCP server on stdin/stdout until the client disconnects.
    Mcp(McpArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory holding config.json. Defaults to ~/expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_expenses_home())]
    expenses_home: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expenses_home(&self) -> &DisplayPath {
        &self.expenses_home
    }
}

/// Args for the `expenses mcp` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct McpArgs {
    /// Freeze the clock at this local time, e.g. 2024-03-13T12:00:00. New expenses are dated
    /// from it and the weekly chart is measured back from it.
    #[arg(long)]
    now: Option<NaiveDateTime>,
}

impl McpArgs {
    pub fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }
}

/// Args for adding an expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddExpenseArgs {
    /// The amount spent, e.g. "12.50". A leading "$" and thousands commas are accepted.
    pub amount: String,
    /// What the money was spent on.
    pub description: String,
    /// The category name. Defaults to the first category.
    #[serde(default)]
    pub category: Option<String>,
    /// The date of the expense as YYYY-MM-DD. Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
}

/// Args for editing an expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateExpenseArgs {
    /// The id of the expense to edit.
    pub id: String,
    /// The new amount.
    pub amount: String,
    /// The new description.
    pub description: String,
    /// The new category name. Defaults to the expense's current category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Identifies one expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseIdArgs {
    /// The expense id.
    pub id: String,
}

/// Args for adding a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddCategoryArgs {
    /// The category name. Surrounding whitespace is removed.
    pub name: String,
    /// A hex color such as "#FF6B6B". Defaults to the first palette color.
    #[serde(default)]
    pub color: Option<String>,
    /// An icon identifier such as "fastfood". Defaults to the first palette icon.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Identifies one category by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CategoryIdArgs {
    /// The category id.
    pub id: String,
}

/// Identifies one category by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CategoryNameArgs {
    /// The category name, matched exactly.
    pub name: String,
}

fn default_expenses_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expenses-home or EXPENSES_HOME instead of relying on the \
                default directory.",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
