//! Expression parser fused with the dimensional checker
//!
//! Recursive descent over the arithmetic grammar, propagating a dimension
//! vector bottom-up through every production. Precedence (lowest to
//! highest):
//! 1. additive (+, -) — operands must have equal dimensions
//! 2. multiplicative (*, /) — dimensions compose / divide
//! 3. power (^) — exponent must be dimensionless and statically constant
//! 4. unary minus — dimension unchanged
//! 5. primary (number, identifier, function call, parenthesized group)
//!
//! Alongside the dimension, every subexpression carries a canonical fully
//! parenthesized reconstruction and, when it is a statically foldable
//! combination of literals, its exact rational value. The folded value is
//! what makes `mass ^ (1 + 1)` scale by 2 rather than by a guess; it is
//! never surfaced to callers.

use crate::error::{Error, Result};
use crate::functions::{self, FunctionKind};
use crate::lexer;
use crate::lookup::QuantityLookup;
use crate::token::{Token, TokenKind};
use mensura_dimension::DimensionVector;
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Signed, Zero};

/// Outcome of analyzing a whole expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The expression's physical dimension.
    pub dimension: DimensionVector,
    /// Canonical, fully parenthesized reconstruction of the expression.
    pub reconstructed: String,
}

/// Result of analyzing one subexpression, owned by the parse frame that
/// produced it and consumed immediately by its parent.
struct Analyzed {
    dimension: DimensionVector,
    text: String,
    /// Exact value, present only for statically foldable combinations of
    /// literals. Invariant: `Some` implies the dimension is zero.
    constant: Option<Rational64>,
}

const MAX_RECURSION_DEPTH: usize = 200;

/// Analyze an expression against the given quantity lookup.
pub fn analyze<L: QuantityLookup + ?Sized>(expression: &str, lookup: &L) -> Result<Analysis> {
    Parser::new(expression, lookup)?.parse()
}

/// Parser for quantity expressions
pub struct Parser<'a, L: QuantityLookup + ?Sized> {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    lookup: &'a L,
}

impl<'a, L: QuantityLookup + ?Sized> Parser<'a, L> {
    /// Create a parser for the given input. Fails on lexical errors.
    pub fn new(expression: &str, lookup: &'a L) -> Result<Self> {
        Ok(Self {
            tokens: lexer::tokenize(expression)?,
            position: 0,
            depth: 0,
            lookup,
        })
    }

    /// Parse the entire expression (top-level entry point).
    pub fn parse(&mut self) -> Result<Analysis> {
        let node = self.parse_add_sub()?;

        // Ensure we've consumed all input
        if self.current().kind != TokenKind::Eof {
            return Err(self.unexpected());
        }

        Ok(Analysis {
            dimension: node.dimension,
            reconstructed: node.text,
        })
    }

    /// The current token; the sequence always ends with `Eof`.
    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Advance the cursor, never moving past the trailing `Eof`.
    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Error for the current token where an operand or `)` was expected.
    fn unexpected(&self) -> Error {
        let token = self.current();
        match token.kind {
            TokenKind::Eof => Error::UnexpectedEndOfInput,
            _ => Error::UnexpectedToken {
                found: token.describe(),
                position: token.position,
            },
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(Error::TooDeeplyNested {
                max: MAX_RECURSION_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse addition and subtraction (lowest precedence). Both operands
    /// must have exactly equal dimensions.
    fn parse_add_sub(&mut self) -> Result<Analyzed> {
        self.enter()?;
        let mut left = self.parse_mul_div()?;

        while let Some(operator) = self.current_add_sub_op() {
            self.advance();
            let right = self.parse_mul_div()?;

            if left.dimension != right.dimension {
                return Err(Error::DimensionMismatch {
                    operator,
                    left: left.dimension,
                    right: right.dimension,
                });
            }

            let constant = if operator == '+' {
                fold(left.constant, right.constant, |a, b| a.checked_add(&b))
            } else {
                fold(left.constant, right.constant, |a, b| a.checked_sub(&b))
            };
            left = Analyzed {
                dimension: left.dimension,
                text: format!("({} {} {})", left.text, operator, right.text),
                constant,
            };
        }

        self.leave();
        Ok(left)
    }

    /// Parse multiplication and division; dimensions compose and divide.
    fn parse_mul_div(&mut self) -> Result<Analyzed> {
        let mut left = self.parse_power()?;

        while let Some(operator) = self.current_mul_div_op() {
            self.advance();
            let right = self.parse_power()?;

            let (dimension, constant) = if operator == '*' {
                (
                    left.dimension.compose(right.dimension),
                    fold(left.constant, right.constant, |a, b| a.checked_mul(&b)),
                )
            } else {
                // checked_div also drops the fold on a zero divisor
                (
                    left.dimension.divide(right.dimension),
                    fold(left.constant, right.constant, |a, b| a.checked_div(&b)),
                )
            };
            left = Analyzed {
                dimension,
                text: format!("({} {} {})", left.text, operator, right.text),
                constant,
            };
        }

        Ok(left)
    }

    /// Parse the power operator. The exponent must be dimensionless and its
    /// exact value statically known; the result is the base dimension scaled
    /// by that value.
    fn parse_power(&mut self) -> Result<Analyzed> {
        let base = self.parse_unary()?;

        if self.current().kind != TokenKind::Caret {
            return Ok(base);
        }
        self.advance();
        let exponent = self.parse_unary()?;

        if !exponent.dimension.is_dimensionless() {
            return Err(Error::NonDimensionlessExponent {
                dimension: exponent.dimension,
            });
        }
        let Some(value) = exponent.constant else {
            return Err(Error::NonConstantExponent);
        };

        Ok(Analyzed {
            dimension: base.dimension.scale(value),
            text: format!("({} ^ {})", base.text, exponent.text),
            constant: fold_pow(base.constant, value),
        })
    }

    /// Parse unary minus; dimension passes through unchanged.
    fn parse_unary(&mut self) -> Result<Analyzed> {
        self.enter()?;
        let node = if self.current().kind == TokenKind::Minus {
            self.advance();
            let operand = self.parse_unary()?;
            Analyzed {
                dimension: operand.dimension,
                text: format!("(-{})", operand.text),
                constant: operand.constant.map(|c| -c),
            }
        } else {
            self.parse_primary()?
        };
        self.leave();
        Ok(node)
    }

    /// Parse primary expressions: numbers, identifiers, function calls and
    /// parenthesized groups.
    fn parse_primary(&mut self) -> Result<Analyzed> {
        match self.current().kind.clone() {
            TokenKind::OpenParen => {
                self.advance();
                let inner = self.parse_add_sub()?;
                self.expect_close_paren()?;
                // The group passes through unchanged; the inner production
                // already parenthesizes where it matters.
                Ok(inner)
            }
            TokenKind::Number(value) => {
                self.advance();
                Ok(Analyzed {
                    dimension: DimensionVector::ZERO,
                    text: canonical_decimal(value),
                    constant: Some(value),
                })
            }
            TokenKind::Identifier(name) => {
                self.advance();
                if self.current().kind == TokenKind::OpenParen {
                    return self.parse_call(name);
                }
                let Some(dimension) = self.lookup.resolve(&name) else {
                    return Err(Error::UnknownQuantity { name });
                };
                Ok(Analyzed {
                    dimension,
                    text: name,
                    constant: None,
                })
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse a function call; the callee must be on the allow-list.
    fn parse_call(&mut self, name: String) -> Result<Analyzed> {
        self.advance(); // consume '('
        let mut args = Vec::new();

        if self.current().kind != TokenKind::CloseParen {
            args.push(self.parse_add_sub()?);
            while self.current().kind == TokenKind::Comma {
                self.advance();
                args.push(self.parse_add_sub()?);
            }
        }
        self.expect_close_paren()?;

        let Some(kind) = functions::classify(&name) else {
            return Err(Error::UnknownFunction { name });
        };

        let text = format!(
            "{}({})",
            name,
            args.iter()
                .map(|a| a.text.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        match kind {
            FunctionKind::Dimensionless => {
                for (index, arg) in args.iter().enumerate() {
                    if !arg.dimension.is_dimensionless() {
                        return Err(Error::NonDimensionlessArgument {
                            function: name,
                            index: index + 1,
                            dimension: arg.dimension,
                        });
                    }
                }
                Ok(Analyzed {
                    dimension: DimensionVector::ZERO,
                    text,
                    constant: None,
                })
            }
            FunctionKind::Sqrt => {
                let arg = single_argument("sqrt", args)?;
                Ok(Analyzed {
                    dimension: arg.dimension.scale(Rational64::new(1, 2)),
                    text,
                    // a square root of a rational is rarely rational
                    constant: None,
                })
            }
            FunctionKind::Abs => {
                let arg = single_argument("abs", args)?;
                Ok(Analyzed {
                    dimension: arg.dimension,
                    text,
                    constant: arg.constant.map(|c| c.abs()),
                })
            }
        }
    }

    fn expect_close_paren(&mut self) -> Result<()> {
        match self.current().kind {
            TokenKind::CloseParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Err(Error::UnbalancedParens),
            _ => Err(self.unexpected()),
        }
    }

    fn current_add_sub_op(&self) -> Option<char> {
        match self.current().kind {
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            _ => None,
        }
    }

    fn current_mul_div_op(&self) -> Option<char> {
        match self.current().kind {
            TokenKind::Star => Some('*'),
            TokenKind::Slash => Some('/'),
            _ => None,
        }
    }
}

fn single_argument(function: &'static str, mut args: Vec<Analyzed>) -> Result<Analyzed> {
    if args.len() != 1 {
        return Err(Error::Arity {
            function,
            expected: 1,
            actual: args.len(),
        });
    }
    args.pop().ok_or(Error::Arity {
        function,
        expected: 1,
        actual: 0,
    })
}

fn fold(
    left: Option<Rational64>,
    right: Option<Rational64>,
    op: impl FnOnce(Rational64, Rational64) -> Option<Rational64>,
) -> Option<Rational64> {
    match (left, right) {
        (Some(a), Some(b)) => op(a, b),
        _ => None,
    }
}

/// Fold `base ^ exponent` for constant bases. Only integer exponents stay
/// rational; overflow drops the fold rather than panicking.
fn fold_pow(base: Option<Rational64>, exponent: Rational64) -> Option<Rational64> {
    let base = base?;
    if !exponent.is_integer() {
        return None;
    }
    let exp = i32::try_from(*exponent.numer()).ok()?;
    if base.is_zero() && exp < 0 {
        return None;
    }
    let magnitude = exp.unsigned_abs();
    let numer = base.numer().checked_pow(magnitude)?;
    let denom = base.denom().checked_pow(magnitude)?;
    if exp < 0 {
        Some(Rational64::new(denom, numer))
    } else {
        Some(Rational64::new(numer, denom))
    }
}

/// Canonical decimal text of a literal: `2.50`, `02.5` and `2.5` all render
/// as `2.5`. Literal values are non-negative with power-of-ten denominators,
/// so the expansion always terminates.
fn canonical_decimal(value: Rational64) -> String {
    let numer = i128::from(*value.numer());
    let denom = i128::from(*value.denom());
    let integer = numer / denom;
    let mut remainder = numer % denom;
    if remainder == 0 {
        return integer.to_string();
    }
    let mut digits = String::new();
    while remainder != 0 {
        remainder *= 10;
        digits.push(char::from(b'0' + (remainder / denom) as u8));
        remainder %= denom;
    }
    format!("{}.{}", integer, digits)
}
