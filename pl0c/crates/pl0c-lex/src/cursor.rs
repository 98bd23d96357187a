//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the scan
//! position and the current line while walking the source byte by byte.
//! The source itself is never modified.

/// Byte returned when reading past the end of the source.
///
/// A literal NUL inside the source reads the same and ends scanning there.
pub const SENTINEL: u8 = 0;

/// A cursor over an immutable source buffer.
///
/// # Example
///
/// ```
/// use pl0c_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
///
/// assert_eq!(cursor.peek(), b'a');
/// assert_eq!(cursor.advance(), b'a');
/// assert_eq!(cursor.advance(), b'\n');
/// assert_eq!(cursor.current_line(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the byte at the current position without consuming it.
    ///
    /// Returns [`SENTINEL`] past the final byte.
    ///
    /// ```
    /// use pl0c_lex::cursor::{Cursor, SENTINEL};
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.peek(), SENTINEL);
    /// ```
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_nth(0)
    }

    /// Returns the byte `offset` positions ahead, or [`SENTINEL`].
    #[inline]
    pub fn peek_nth(&self, offset: usize) -> u8 {
        self.source
            .as_bytes()
            .get(self.position + offset)
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Consumes and returns the current byte.
    ///
    /// Increments the line counter when the byte is `\n`. At the end of
    /// input this returns [`SENTINEL`] and does not move.
    #[inline]
    pub fn advance(&mut self) -> u8 {
        let b = self.peek();
        if b == SENTINEL {
            return SENTINEL;
        }

        self.position += 1;
        if b == b'\n' {
            self.line += 1;
        }
        b
    }

    /// Consumes bytes while `pred` holds.
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// ```
    /// use pl0c_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(":=");
    /// assert!(!cursor.match_byte(b'='));
    /// assert!(cursor.match_byte(b':'));
    /// assert!(cursor.match_byte(b'='));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if expected != SENTINEL && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once the current byte is the sentinel.
    pub fn is_at_end(&self) -> bool {
        self.peek() == SENTINEL
    }

    /// Returns the full character at the cursor, for diagnostics.
    ///
    /// Returns `'\0'` at the end of input.
    pub fn current_char(&self) -> char {
        self.source
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Line number of the most recently consumed byte (1 if none yet).
    pub fn current_line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` up to the current position.
    ///
    /// ```
    /// use pl0c_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.advance_while(|b| b.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
