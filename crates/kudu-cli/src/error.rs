//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Input file is not valid for the command.
    #[error("invalid input in {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// A field parsed but holds an unusable value.
    #[error("invalid {field}: {message}")]
    InvalidField {
        /// Dotted field name.
        field: &'static str,
        /// What was wrong.
        message: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
