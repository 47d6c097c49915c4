//! Global error handling for git-flatten
//!
//! Per-file problems never surface here: they are turned into placeholder
//! records by the flattener. What remains are configuration mistakes and
//! failures to produce the output document itself.

use std::io;
use thiserror::Error;

use crate::git::GitError;

/// Global error type for git-flatten operations
#[derive(Error, Debug)]
pub enum FlattenError {
    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for git-flatten operations
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Creates a FlattenError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FlattenError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets `main` keep returning io::Result
impl From<FlattenError> for io::Error {
    fn from(err: FlattenError) -> Self {
        match err {
            FlattenError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
