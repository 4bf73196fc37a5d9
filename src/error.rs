//! Error handling for the ddd-skeleton application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for generator operations.
///
/// This enum represents all possible errors that can occur within the
/// ddd-skeleton application. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents a failed copy, carrying both operand paths
    #[error("Failed to copy '{source_path}' to '{dest_path}': {source}.")]
    Copy {
        source_path: String,
        dest_path: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur while walking or rewriting a template tree
    #[error("Template error: {0}.")]
    Template(String),

    /// Represents errors in reading or writing the persisted state file
    #[error("State file error: {0}.")]
    State(#[from] serde_json::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error to stderr.
///
/// Notices are terminal output only; the process exit code stays at the
/// default success code regardless of internal failures.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
}
