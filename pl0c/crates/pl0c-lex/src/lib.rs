//! pl0c-lex - Lexical Analyzer for PL/0
//!
//! This crate provides the lexer (tokenizer) for Wirth's PL/0 teaching
//! language. It transforms source text into a stream of classified tokens
//! that a parser can consume.
//!
//! # Example Usage
//!
//! ```
//! use pl0c_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("var x;");
//!
//! // Get tokens one at a time
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Var);
//! assert_eq!(token.text, "var");
//!
//! // Or iterate; the stream ends with the end-of-input token
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.unwrap().kind).collect();
//! assert_eq!(kinds, [TokenKind::Ident, TokenKind::Semicolon, TokenKind::Dot]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, spans, and borrowed/owned tokens
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor with line tracking
//! - [`error`] - Fatal lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words (11 total, case-sensitive): `const`, `var`, `procedure`,
//! `call`, `begin`, `end`, `if`, `then`, `while`, `do`, `odd`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `9223372036854775807` (must fit in `i64`)
//!
//! ## Operators and Punctuation
//!
//! - **Assignment**: `:=`
//! - **Comparison**: `=`, `#`, `<`, `>`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Grouping**: `(`, `)`
//! - **Separation**: `.`, `,`, `;`
//!
//! ## Comments
//!
//! `{ ... }`, may span lines, do not nest.
//!
//! ## End of input
//!
//! The end of the source is reported as a [`TokenKind::Dot`] token with empty
//! text, so a consumer that stops at the first `.` also stops at the end of
//! the file. [`Token::is_end_of_input`] tells the two apart.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use token::{OwnedToken, Span, Token, TokenKind, KEYWORDS};

/// Tokenizes a whole source text.
///
/// The returned vector ends with the end-of-input token. Scanning stops at
/// the first lexical error, which is returned instead of any tokens.
///
/// ```
/// use pl0c_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x := 1").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::Assign);
/// assert!(tokens[3].is_end_of_input());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    Lexer::new(source).collect()
}
