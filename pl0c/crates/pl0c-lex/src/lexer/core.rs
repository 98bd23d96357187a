//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Span, Token, TokenKind};

/// Where the lexer is in its token stream.
#[derive(Debug, Clone)]
enum State {
    /// More tokens may follow.
    Scanning,
    /// The end-of-input token has been produced.
    Finished,
    /// A fatal error was reported; it is returned again on every call.
    Failed(LexError),
}

/// Lexer for PL/0.
///
/// The lexer transforms source text into a stream of tokens. It skips
/// whitespace and comments, then classifies one identifier, keyword,
/// number, or symbol per call.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    state: State,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            state: State::Scanning,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches on the class of the current byte.
    ///
    /// At the end of input a [`TokenKind::Dot`] token with empty text is
    /// returned, and keeps being returned on later calls. After an error
    /// the same error is returned on every later call.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        match &self.state {
            State::Scanning => {},
            State::Finished => return Ok(self.make_token(TokenKind::Dot)),
            State::Failed(err) => return Err(err.clone()),
        }

        match self.scan() {
            Ok(token) => {
                trace!(line = token.line, kind = %token.kind, text = token.text, "token");
                if token.is_end_of_input() {
                    self.state = State::Finished;
                }
                Ok(token)
            },
            Err(err) => {
                debug!(line = err.line(), error = %err, "lexing failed");
                self.state = State::Failed(err.clone());
                Err(err)
            },
        }
    }

    fn scan(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.current_line();

        match self.cursor.peek() {
            b if is_ident_start(b) => Ok(self.lex_identifier()),
            b if b.is_ascii_digit() => self.lex_number(),
            _ => self.lex_symbol(),
        }
    }

    /// Builds a token of `kind` spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            Span::new(self.token_start, self.cursor.position()),
            self.token_start_line,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.current_line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the end-of-input token has been produced.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }
}

/// Identifier start: ASCII letter or underscore.
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Identifier continuation: ASCII letter, digit, or underscore.
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Yields every token up to and including the end-of-input token, or up to
/// and including the first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Scanning) {
            Some(self.next_token())
        } else {
            None
        }
    }
}

impl FusedIterator for Lexer<'_> {}
