//! Error types for terato-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while setting up a lint run.
///
/// Running the checks themselves cannot fail; every variant here is raised
/// before the first word is processed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LintError {
    /// Both an allow-list and a deny-list of checks were given.
    #[error("cannot enable and disable checks at the same time (enable: {enabled}; disable: {disabled})")]
    ConflictingSelection {
        /// Comma-separated codes of the allow-list.
        enabled: String,
        /// Comma-separated codes of the deny-list.
        disabled: String,
    },

    /// A check code did not name any known check.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The code that was requested.
        name: String,
        /// Comma-separated list of available check codes.
        available: String,
    },
}

/// Result type alias using [`LintError`].
pub type LintResult<T> = Result<T, LintError>;
