//! Error types for expression analysis
//!
//! Every failure mode of [`analyze`](crate::analyze) is a variant here,
//! carrying enough structured data (offending name, positions, both
//! dimensions where relevant) for a caller to render a precise message.
//! Failures are terminal: the first error aborts the whole analysis.

use mensura_dimension::DimensionVector;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

fn addsub_verb(operator: &char) -> &'static str {
    if *operator == '+' {
        "add"
    } else {
        "subtract"
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unexpected character '{character}' at position {position}")]
    Lex { character: char, position: usize },

    #[error("numeric literal at position {position} is too large")]
    Overflow { position: usize },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("expected closing parenthesis")]
    UnbalancedParens,

    #[error("expression too deeply nested (max depth: {max})")]
    TooDeeplyNested { max: usize },

    #[error("unknown quantity: {name}")]
    UnknownQuantity { name: String },

    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("{function} requires exactly {expected} argument(s), got {actual}")]
    Arity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(
        "cannot {} quantities with different dimensions: {} and {}",
        addsub_verb(.operator),
        .left.readable(),
        .right.readable()
    )]
    DimensionMismatch {
        operator: char,
        left: DimensionVector,
        right: DimensionVector,
    },

    #[error("exponent must be dimensionless, but has dimension {}", .dimension.readable())]
    NonDimensionlessExponent { dimension: DimensionVector },

    /// `index` is 1-based, matching how the argument reads in the source.
    #[error(
        "function {function} requires dimensionless arguments, but argument {index} has dimension {}",
        .dimension.readable()
    )]
    NonDimensionlessArgument {
        function: String,
        index: usize,
        dimension: DimensionVector,
    },

    #[error("exponent is not a constant: its numeric value cannot be determined statically")]
    NonConstantExponent,
}
