pub mod aggregate;
pub mod args;
mod clock;
pub mod commands;
mod config;
mod error;
mod history;
mod ledger;
mod mcp;
pub mod model;
pub mod store;
mod utils;

pub use clock::Clock;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use history::{History, HistorySummary};
pub use ledger::Ledger;
pub use mcp::ExpenseServer;
