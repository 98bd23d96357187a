//! Token definitions for PL/0.
//!
//! A [`Token`] borrows its text from the source buffer. Use
//! [`Token::to_owned_token`] when a token has to outlive the source.

use std::fmt;

/// The kind of a lexical token.
///
/// The end of input is not a separate kind: it is reported as [`TokenKind::Dot`]
/// with empty text, see [`Token::is_end_of_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier (`x`, `squ`, `_tmp1`).
    Ident,
    /// Decimal integer literal.
    Number,

    /// `const`
    Const,
    /// `var`
    Var,
    /// `procedure`
    Procedure,
    /// `call`
    Call,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `if`
    If,
    /// `then`
    Then,
    /// `while`
    While,
    /// `do`
    Do,
    /// `odd`
    Odd,

    /// `:=`
    Assign,
    /// `=`
    Equal,
    /// `#`
    Hash,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `.` (also the end-of-input marker)
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

/// Reserved words and their kinds, in declaration order.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("const", TokenKind::Const),
    ("var", TokenKind::Var),
    ("procedure", TokenKind::Procedure),
    ("call", TokenKind::Call),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("odd", TokenKind::Odd),
];

impl TokenKind {
    /// Looks up a reserved word. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use pl0c_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("begin"), Some(TokenKind::Begin));
    /// assert_eq!(TokenKind::keyword("BEGIN"), None);
    /// ```
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "const" => TokenKind::Const,
            "var" => TokenKind::Var,
            "procedure" => TokenKind::Procedure,
            "call" => TokenKind::Call,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "odd" => TokenKind::Odd,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps a single-character symbol to its kind.
    ///
    /// `:` is not included; it only appears as part of `:=`.
    pub fn symbol(byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b'=' => TokenKind::Equal,
            b'#' => TokenKind::Hash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Multiply,
            b'/' => TokenKind::Divide,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'.' => TokenKind::Dot,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for the 11 reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Const
                | TokenKind::Var
                | TokenKind::Procedure
                | TokenKind::Call
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Odd
        )
    }

    /// The fixed display name used in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Call => "CALL",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Odd => "ODD",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Hash => "HASH",
            TokenKind::LessThan => "LESS-THAN",
            TokenKind::GreaterThan => "GREATER-THAN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LeftParen => "LEFT-PAREN",
            TokenKind::RightParen => "RIGHT-PAREN",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from `start` to `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} > end {end}");
        Self { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans (only the end-of-input token has one).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Exact source text; empty only for the end-of-input token.
    pub text: &'src str,
    /// Location of `text` in the source.
    pub span: Span,
    /// Line the token was scanned on (1-based).
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'src str, span: Span, line: u32) -> Self {
        Self {
            kind,
            text,
            span,
            line,
        }
    }

    /// True for the synthetic token produced at the end of the source, as
    /// opposed to a literal `.`.
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::Dot && self.text.is_empty()
    }

    /// Value of a [`TokenKind::Number`] token.
    ///
    /// The lexer only produces number tokens whose text fits in `i64`.
    pub fn number_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Number => self.text.parse().ok(),
            _ => None,
        }
    }

    /// Copies the token out of the source buffer.
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            text: self.text.to_string(),
            span: self.span,
            line: self.line,
        }
    }
}

impl fmt::Display for Token<'_> {
    /// Formats as `KIND, text`, the body of a listing line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.kind, self.text)
    }
}

/// A token that owns its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Copied source text.
    pub text: String,
    /// Location of `text` in the original source.
    pub span: Span,
    /// Line the token was scanned on (1-based).
    pub line: u32,
}

impl OwnedToken {
    /// Borrows this token as a [`Token`].
    pub fn as_token(&self) -> Token<'_> {
        Token::new(self.kind, &self.text, self.span, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_matches_lookup() {
        for (text, kind) in KEYWORDS {
            assert_eq!(TokenKind::keyword(text), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert_eq!(TokenKind::keyword("IF"), None);
        assert_eq!(TokenKind::keyword("Var"), None);
        assert_eq!(TokenKind::keyword("ends"), None);
    }

    #[test]
    fn test_non_keywords() {
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Assign.is_keyword());
        assert!(!TokenKind::Dot.is_keyword());
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(TokenKind::symbol(b'='), Some(TokenKind::Equal));
        assert_eq!(TokenKind::symbol(b'#'), Some(TokenKind::Hash));
        assert_eq!(TokenKind::symbol(b';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::symbol(b':'), None);
        assert_eq!(TokenKind::symbol(b'{'), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::LessThan.name(), "LESS-THAN");
        assert_eq!(TokenKind::RightParen.to_string(), "RIGHT-PAREN");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    }

    #[test]
    fn test_end_of_input_vs_dot() {
        let dot = Token::new(TokenKind::Dot, ".", Span::new(3, 4), 1);
        let end = Token::new(TokenKind::Dot, "", Span::new(4, 4), 1);

        assert!(!dot.is_end_of_input());
        assert!(end.is_end_of_input());
        assert!(end.span.is_empty());
    }

    #[test]
    fn test_number_value() {
        let num = Token::new(TokenKind::Number, "42", Span::new(0, 2), 1);
        let ident = Token::new(TokenKind::Ident, "x", Span::new(0, 1), 1);

        assert_eq!(num.number_value(), Some(42));
        assert_eq!(ident.number_value(), None);
    }

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Assign, ":=", Span::new(2, 4), 3);
        assert_eq!(tok.to_string(), "ASSIGN, :=");
    }

    #[test]
    fn test_owned_round_trip() {
        let source = String::from("squ");
        let owned = Token::new(TokenKind::Ident, &source, Span::new(0, 3), 7).to_owned_token();
        drop(source);

        assert_eq!(owned.text, "squ");
        assert_eq!(owned.as_token().line, 7);
        assert_eq!(owned.as_token().span.len(), 3);
    }
}
