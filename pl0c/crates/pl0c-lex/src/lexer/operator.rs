//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and the
//! end-of-input marker.

use crate::cursor::SENTINEL;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a symbol, `:=`, or the end-of-input token.
    ///
    /// Single-character symbols consume exactly one byte. At the end of
    /// input nothing is consumed and a `Dot` token with empty text is
    /// returned.
    pub(crate) fn lex_symbol(&mut self) -> Result<Token<'a>> {
        let b = self.cursor.peek();

        if b == SENTINEL {
            return Ok(self.make_token(TokenKind::Dot));
        }
        if b == b':' {
            return self.lex_colon();
        }

        match TokenKind::symbol(b) {
            Some(kind) => {
                self.cursor.advance();
                Ok(self.make_token(kind))
            },
            None => Err(self.unknown_token()),
        }
    }

    /// Lexes assignment.
    ///
    /// Handles: `:=`; a lone `:` is an error naming the character after it.
    fn lex_colon(&mut self) -> Result<Token<'a>> {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            Ok(self.make_token(TokenKind::Assign))
        } else {
            Err(LexError::MalformedAssign {
                line: self.cursor.current_line(),
                found: self.cursor.current_char(),
            })
        }
    }

    fn unknown_token(&self) -> LexError {
        LexError::UnknownToken {
            line: self.cursor.current_line(),
            found: self.cursor.current_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_op(source: &str) -> Result<Token<'_>> {
        Lexer::new(source).next_token()
    }

    fn kind(source: &str) -> TokenKind {
        lex_op(source).unwrap().kind
    }

    #[test]
    fn test_assign() {
        let token = lex_op(":=").unwrap();
        assert_eq!(token.kind, TokenKind::Assign);
        assert_eq!(token.text, ":=");
    }

    #[test]
    fn test_equal_is_not_assign() {
        let token = lex_op("=").unwrap();
        assert_eq!(token.kind, TokenKind::Equal);
        assert_eq!(token.text, "=");
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(kind("#"), TokenKind::Hash);
        assert_eq!(kind("<"), TokenKind::LessThan);
        assert_eq!(kind(">"), TokenKind::GreaterThan);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(kind("+"), TokenKind::Plus);
        assert_eq!(kind("-"), TokenKind::Minus);
        assert_eq!(kind("*"), TokenKind::Multiply);
        assert_eq!(kind("/"), TokenKind::Divide);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(kind("("), TokenKind::LeftParen);
        assert_eq!(kind(")"), TokenKind::RightParen);
        assert_eq!(kind(","), TokenKind::Comma);
        assert_eq!(kind(";"), TokenKind::Semicolon);
    }

    #[test]
    fn test_literal_dot() {
        let token = lex_op(".").unwrap();
        assert_eq!(token.kind, TokenKind::Dot);
        assert_eq!(token.text, ".");
        assert!(!token.is_end_of_input());
    }

    #[test]
    fn test_symbols_are_single_char() {
        let mut lexer = Lexer::new("<>");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LessThan);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::GreaterThan);
    }

    #[test]
    fn test_colon_without_equal() {
        assert_eq!(
            lex_op(":x"),
            Err(LexError::MalformedAssign { line: 1, found: 'x' })
        );
    }

    #[test]
    fn test_colon_space_equal() {
        assert_eq!(
            lex_op(": ="),
            Err(LexError::MalformedAssign { line: 1, found: ' ' })
        );
    }

    #[test]
    fn test_colon_at_end_of_input() {
        assert_eq!(
            lex_op(":"),
            Err(LexError::MalformedAssign { line: 1, found: '\0' })
        );
    }

    #[test]
    fn test_colon_before_newline() {
        assert_eq!(
            lex_op(":\n="),
            Err(LexError::MalformedAssign { line: 1, found: '\n' })
        );
    }

    #[test]
    fn test_colon_on_later_line() {
        let err = Lexer::new("x\n:y").nth(1).unwrap().unwrap_err();
        assert_eq!(err, LexError::MalformedAssign { line: 2, found: 'y' });
        assert_eq!(err.to_string(), "Unkown token: 'y'");
    }

    #[test]
    fn test_unknown_characters() {
        for (source, found) in [("!", '!'), ("%", '%'), ("'", '\''), ("\"", '"'), ("λ", 'λ')] {
            assert_eq!(lex_op(source), Err(LexError::UnknownToken { line: 1, found }));
        }
    }

    #[test]
    fn test_end_of_input() {
        let token = lex_op("").unwrap();
        assert_eq!(token.kind, TokenKind::Dot);
        assert_eq!(token.text, "");
        assert!(token.is_end_of_input());
    }
}
