#![forbid(unsafe_code)]

//! Dimensional analysis of arithmetic expressions over physical quantities.
//!
//! Takes an expression such as `force * distance`, resolves each identifier
//! against an injected [`QuantityLookup`], and propagates dimension vectors
//! bottom-up through the grammar, rejecting anything dimensionally
//! inconsistent (`length + time`, `sin(length)`, a dimensioned exponent).
//!
//! # Pipeline
//!
//! ```text
//! Expression String
//!      |
//!    Lexer -> Token sequence
//!      |
//!   Parser (recursive descent, fused dimensional checker)
//!      |
//! Analysis { dimension, reconstructed expression }
//! ```
//!
//! The whole pipeline is a pure function of the input string and the
//! read-only lookup; nothing is shared or mutated across calls.
//!
//! # Example
//!
//! ```
//! use mensura_analyzer::analyze;
//! use mensura_dimension::DimensionVector;
//! use mensura_quantity::registry;
//!
//! let analysis = analyze("force * distance", registry()).unwrap();
//! assert_eq!(analysis.dimension, DimensionVector::ENERGY);
//! assert_eq!(analysis.reconstructed, "(force * distance)");
//! ```

pub mod error;
pub mod functions;
pub mod lexer;
pub mod lookup;
pub mod parser;
pub mod token;

// Re-export main types
pub use error::{Error, Result};
pub use lookup::QuantityLookup;
pub use parser::{analyze, Analysis, Parser};
