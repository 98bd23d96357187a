//! Number literal lexing.
//!
//! PL/0 only has unsigned decimal integer literals. A leading `-` or `+` is
//! a separate operator token.

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes the maximal run of decimal digits. The digits must fit in
    /// an `i64`, otherwise the literal is rejected.
    pub(crate) fn lex_number(&mut self) -> Result<Token<'a>> {
        self.cursor.advance_while(|b| b.is_ascii_digit());

        let token = self.make_token(TokenKind::Number);
        match token.text.parse::<i64>() {
            Ok(_) => Ok(token),
            Err(_) => Err(LexError::InvalidNumber {
                line: self.cursor.current_line(),
                text: token.text.to_string(),
            }),
        }
    }
}
