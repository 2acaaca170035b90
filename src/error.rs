//! Error types for the logger adapter.
//!
//! Logging calls never fail; these errors only surface from bootstrap and
//! configuration parsing.

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A global `log` logger was already installed.
    ///
    /// This variant wraps [`log::SetLoggerError`] and is automatically
    /// converted via the `#[from]` attribute.
    #[error("Logger already initialized: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    /// A severity name could not be parsed.
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
}
