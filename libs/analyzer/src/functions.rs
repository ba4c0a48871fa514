//! Function allow-list for expression analysis
//!
//! A closed set of recognized functions in a compile-time perfect hash set.
//! Matching is case-insensitive; anything outside the list is an
//! `UnknownFunction` error at the call site.

use phf::phf_set;

/// Functions whose arguments must all be dimensionless and whose result is
/// dimensionless, at any arity.
static DIMENSIONLESS_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "asin", "acos", "atan",
    "sinh", "cosh", "tanh", "asinh", "acosh", "atanh",
    "exp", "log", "ln", "log10", "log2",
};

/// Dimensional behavior classes of the recognized functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Dimensionless in, dimensionless out (trig, hyperbolic, exp, log).
    Dimensionless,
    /// Exactly one argument of any dimension; result is the argument's
    /// dimension scaled by 1/2.
    Sqrt,
    /// Exactly one argument of any dimension, passed through unchanged.
    Abs,
}

/// Classify a callee name, case-insensitively.
pub fn classify(name: &str) -> Option<FunctionKind> {
    let lower = name.to_lowercase();
    if DIMENSIONLESS_FUNCTIONS.contains(lower.as_str()) {
        return Some(FunctionKind::Dimensionless);
    }
    match lower.as_str() {
        "sqrt" => Some(FunctionKind::Sqrt),
        "abs" => Some(FunctionKind::Abs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("SIN"), Some(FunctionKind::Dimensionless));
        assert_eq!(classify("Sqrt"), Some(FunctionKind::Sqrt));
        assert_eq!(classify("ABS"), Some(FunctionKind::Abs));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(classify("sine"), None);
        assert_eq!(classify("pow"), None);
    }
}
