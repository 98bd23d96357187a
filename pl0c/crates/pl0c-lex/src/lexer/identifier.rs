//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use super::core::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters or underscores. After reading the identifier,
    /// checks if it matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `TokenKind::Begin`) or `TokenKind::Ident`
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(TokenKind::keyword(text).unwrap_or(TokenKind::Ident))
    }
}
