//! Expression lexer - tokenizes input strings
//!
//! Whitespace is discarded everywhere before scanning begins, not only
//! between tokens: `len gth` lexes as the single identifier `length`.
//! Token positions therefore index into the whitespace-stripped input.
//!
//! Numbers are maximal digit runs with at most one decimal point, held as
//! exact rationals. Identifiers start with an alphabetic character and
//! continue with alphanumerics and underscores. Anything outside the eight
//! recognized symbols fails the whole tokenize call.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};
use num_rational::Rational64;

/// The expression lexer
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

/// Tokenize a whole expression, ending with an [`TokenKind::Eof`] token.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

impl Lexer {
    /// Create a new lexer for the given input, discarding all whitespace.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
        let current_char = chars.first().copied();

        Self {
            chars,
            position: 0,
            current_char,
        }
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.chars.get(self.position).copied();
    }

    /// Peek at the next character without advancing
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        let position = self.position;

        let Some(c) = self.current_char else {
            return Ok(Token::eof(position));
        };

        // Single character tokens
        let symbol = match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = symbol {
            self.advance();
            return Ok(Token::new(kind, position));
        }

        if c.is_ascii_digit() || (c == '.' && self.next_is_digit()) {
            return self.read_number();
        }

        if c.is_alphabetic() {
            return Ok(self.read_identifier());
        }

        Err(Error::Lex {
            character: c,
            position,
        })
    }

    fn next_is_digit(&self) -> bool {
        self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false)
    }

    /// Read a number: digits with at most one decimal point, which must be
    /// followed by a digit. The value is exact: `2.5` becomes `5/2`.
    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        let mut mantissa: i64 = 0;
        let mut frac_digits: u32 = 0;
        let mut seen_point = false;

        while let Some(c) = self.current_char {
            if c.is_ascii_digit() {
                mantissa = mantissa
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(i64::from(c as u8 - b'0')))
                    .ok_or(Error::Overflow { position: start })?;
                if seen_point {
                    frac_digits += 1;
                }
                self.advance();
            } else if c == '.' {
                // A second point, or a point with no digit after it, is a
                // lex error rather than the start of another token.
                if seen_point || !self.next_is_digit() {
                    return Err(Error::Lex {
                        character: '.',
                        position: self.position,
                    });
                }
                seen_point = true;
                self.advance();
            } else {
                break;
            }
        }

        let denominator = 10i64
            .checked_pow(frac_digits)
            .ok_or(Error::Overflow { position: start })?;
        let value = Rational64::new(mantissa, denominator);
        Ok(Token::new(TokenKind::Number(value), start))
    }

    /// Read an identifier: alphabetic start, then alphanumerics and `_`.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;

        while let Some(c) = self.current_char {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let name: String = self.chars[start..self.position].iter().collect();
        Token::new(TokenKind::Identifier(name), start)
    }
}
