//! Lexical errors.
//!
//! Every error is fatal: the lexer stops at the first one and never resumes.

use thiserror::Error;

/// A fatal error found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input reached inside a `{ ... }` comment.
    #[error("Unterminated comment")]
    UnterminatedComment {
        /// Line on which the input ended.
        line: u32,
    },

    /// Digit sequence that does not fit in a signed 64-bit integer.
    #[error("Invalid number")]
    InvalidNumber {
        /// Line of the literal.
        line: u32,
        /// The offending digits.
        text: String,
    },

    // Token message text is fixed, spelling included. `found` is printed raw.

    /// Character that starts no token.
    #[error("Unkown token '{found}'")]
    UnknownToken {
        /// Line of the character.
        line: u32,
        /// The unexpected character.
        found: char,
    },

    /// `:` not followed by `=`.
    #[error("Unkown token: '{found}'")]
    MalformedAssign {
        /// Line of the character after the colon.
        line: u32,
        /// The character after the colon (`'\0'` at end of input).
        found: char,
    },
}

impl LexError {
    /// Line number the diagnostic is reported on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedComment { line }
            | LexError::InvalidNumber { line, .. }
            | LexError::UnknownToken { line, .. }
            | LexError::MalformedAssign { line, .. } => *line,
        }
    }
}

/// Result type alias for lexing.
pub type Result<T> = std::result::Result<T, LexError>;
