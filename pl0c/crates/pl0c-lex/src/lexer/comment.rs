//! Comment lexing.
//!
//! This module handles skipping whitespace and `{ ... }` comments.

use crate::error::{LexError, Result};
use crate::Lexer;

/// Whitespace as classified by C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. A comment may be followed by more
    /// whitespace and further comments; all of them are consumed.
    pub fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            self.cursor.advance_while(is_space);

            if self.cursor.peek() != b'{' {
                return Ok(());
            }
            self.skip_comment()?;
        }
    }

    /// Skips one comment, from `{` up to and including the next `}`.
    ///
    /// Comments do not nest: the first `}` closes the comment.
    fn skip_comment(&mut self) -> Result<()> {
        self.cursor.advance();

        loop {
            match self.cursor.advance() {
                b'}' => return Ok(()),
                crate::cursor::SENTINEL => {
                    return Err(LexError::UnterminatedComment {
                        line: self.cursor.current_line(),
                    });
                },
                _ => {},
            }
        }
    }
}
