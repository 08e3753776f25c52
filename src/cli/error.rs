//! CLI-level errors (wraps core errors)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::errors::SgfError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Sgf(#[from] SgfError),

    #[error("cannot access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Sgf(_) => crate::exitcode::DATAERR,
        }
    }
}
