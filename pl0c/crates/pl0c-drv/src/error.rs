//! Error handling for the pl0c driver.
//!
//! Every error is fatal and reported as a single diagnostic line of the form
//! `pl0c: error: <line>: <message>`.

use std::path::PathBuf;

use pl0c_lex::LexError;
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input path does not end in `.pl0`.
    #[error("File must end in '.pl0'")]
    FileExtension(PathBuf),

    /// The input file could not be opened.
    #[error("Unable to open file '{}'", .path.display())]
    FileOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// The input file was opened but could not be read.
    #[error("Unable to read file")]
    FileRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Writing the token listing failed.
    #[error("Unable to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Tokenizing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl DriverError {
    /// Line the diagnostic is reported on.
    ///
    /// Errors outside the lexer happen before any byte is scanned, so they
    /// report line 1.
    pub fn line(&self) -> u32 {
        match self {
            DriverError::Lex(err) => err.line(),
            _ => 1,
        }
    }

    /// The full diagnostic line printed on stderr.
    pub fn diagnostic(&self) -> String {
        format!("pl0c: error: {}: {}", self.line(), self)
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
