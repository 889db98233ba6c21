//! The in-memory stores behind a [`crate::Ledger`].
mod categories;
mod expenses;

pub use categories::{CategoryOps, CategoryStore};
pub use expenses::ExpenseStore;
