//! Error and result types shared across the crate.

/// All fallible operations surface an `anyhow::Error` with context attached along the way.
pub type Error = anyhow::Error;

/// The crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
