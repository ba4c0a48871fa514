//! Token types for the expression lexer
//!
//! A closed set of token kinds, each carrying only the payload it needs:
//! the exact rational value for numbers, the text for identifiers, nothing
//! for operators and punctuation.

use num_rational::Rational64;

/// Token kinds for the expression lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal, held as an exact rational (`2.5` is `5/2`).
    Number(Rational64),
    /// Quantity or function name, as written (lookup is case-insensitive,
    /// the token is not).
    Identifier(String),

    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Caret,      // ^
    OpenParen,  // (
    CloseParen, // )
    Comma,      // ,

    /// End of input
    Eof,
}

/// A token together with its byte position in the (whitespace-stripped)
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn eof(position: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            position,
        }
    }

    /// Short human description, used in `UnexpectedToken` messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Number(value) => format!("number '{}'", value),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Plus => "'+'".into(),
            TokenKind::Minus => "'-'".into(),
            TokenKind::Star => "'*'".into(),
            TokenKind::Slash => "'/'".into(),
            TokenKind::Caret => "'^'".into(),
            TokenKind::OpenParen => "'('".into(),
            TokenKind::CloseParen => "')'".into(),
            TokenKind::Comma => "','".into(),
            TokenKind::Eof => "end of input".into(),
        }
    }
}
