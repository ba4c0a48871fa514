//! Unit tests for the parser and dimensional checker, run against a fixed
//! fake quantity table rather than the real registry.

use mensura_analyzer::{analyze, Analysis, Error, QuantityLookup};
use mensura_dimension::DimensionVector;
use num_rational::Rational64;

/// A small fixed table; enough to exercise every grammar production.
struct FakeTable;

impl QuantityLookup for FakeTable {
    fn resolve(&self, name: &str) -> Option<DimensionVector> {
        match name.to_lowercase().as_str() {
            "mass" => Some(DimensionVector::MASS),
            "length" => Some(DimensionVector::LENGTH),
            "time" => Some(DimensionVector::TIME),
            "area" => Some(DimensionVector::AREA),
            "force" => Some(DimensionVector::FORCE),
            "angle" => Some(DimensionVector::ZERO),
            _ => None,
        }
    }

    fn units_for(&self, _dimension: DimensionVector) -> Vec<String> {
        Vec::new()
    }

    fn names_for(&self, _dimension: DimensionVector) -> Vec<String> {
        Vec::new()
    }
}

fn run(expression: &str) -> Result<Analysis, Error> {
    analyze(expression, &FakeTable)
}

fn dimension(expression: &str) -> DimensionVector {
    run(expression).unwrap().dimension
}

fn reconstructed(expression: &str) -> String {
    run(expression).unwrap().reconstructed
}

#[test]
fn test_bare_identifier() {
    let analysis = run("mass").unwrap();
    assert_eq!(analysis.dimension, DimensionVector::MASS);
    assert_eq!(analysis.reconstructed, "mass");
}

#[test]
fn test_identifier_lookup_is_case_insensitive_but_text_verbatim() {
    let analysis = run("Mass").unwrap();
    assert_eq!(analysis.dimension, DimensionVector::MASS);
    assert_eq!(analysis.reconstructed, "Mass");
}

#[test]
fn test_number_is_dimensionless_with_canonical_text() {
    let analysis = run("2.50").unwrap();
    assert!(analysis.dimension.is_dimensionless());
    assert_eq!(analysis.reconstructed, "2.5");
}

#[test]
fn test_multiplication_composes_dimensions() {
    assert_eq!(
        dimension("mass * length"),
        DimensionVector::MASS.compose(DimensionVector::LENGTH)
    );
    assert_eq!(reconstructed("mass * length"), "(mass * length)");
}

#[test]
fn test_division_divides_dimensions() {
    assert_eq!(
        dimension("length / time"),
        DimensionVector::LENGTH.divide(DimensionVector::TIME)
    );
}

#[test]
fn test_precedence_multiplication_binds_tighter() {
    // (mass * length) + (mass * length) is consistent
    let analysis = run("mass * length + length * mass").unwrap();
    assert_eq!(
        analysis.reconstructed,
        "((mass * length) + (length * mass))"
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        reconstructed("length / time / time"),
        "((length / time) / time)"
    );
    assert_eq!(dimension("length / time / time"), DimensionVector::ACCELERATION);
}

#[test]
fn test_addition_requires_equal_dimensions() {
    assert_eq!(dimension("length + length"), DimensionVector::LENGTH);

    let err = run("length + time").unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            operator: '+',
            left: DimensionVector::LENGTH,
            right: DimensionVector::TIME,
        }
    );
}

#[test]
fn test_subtraction_mismatch_reports_minus() {
    let err = run("mass - time").unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { operator: '-', .. }));
}

#[test]
fn test_unary_minus_preserves_dimension() {
    let analysis = run("-mass").unwrap();
    assert_eq!(analysis.dimension, DimensionVector::MASS);
    assert_eq!(analysis.reconstructed, "(-mass)");
}

#[test]
fn test_double_negation() {
    assert_eq!(reconstructed("--2"), "(-(-2))");
}

#[test]
fn test_parenthesized_group_passes_through() {
    let analysis = run("(mass)").unwrap();
    assert_eq!(analysis.reconstructed, "mass");
    assert_eq!(reconstructed("(mass * length)"), "(mass * length)");
}

#[test]
fn test_power_scales_by_written_exponent() {
    assert_eq!(
        dimension("mass^2"),
        DimensionVector::MASS.scale(Rational64::from_integer(2))
    );
    assert_eq!(
        dimension("mass^3"),
        DimensionVector::MASS.scale(Rational64::from_integer(3))
    );
    assert_eq!(reconstructed("mass ^ 2"), "(mass ^ 2)");
}

#[test]
fn test_power_accepts_rational_exponents() {
    assert_eq!(
        dimension("length^0.5"),
        DimensionVector::LENGTH.scale(Rational64::new(1, 2))
    );
    assert_eq!(
        dimension("length^0.3"),
        DimensionVector::LENGTH.scale(Rational64::new(3, 10))
    );
}

#[test]
fn test_power_accepts_negative_exponents() {
    assert_eq!(
        dimension("time^-1"),
        DimensionVector::TIME.scale(Rational64::from_integer(-1))
    );
    assert_eq!(reconstructed("time^-1"), "(time ^ (-1))");
}

#[test]
fn test_power_folds_constant_exponent_expressions() {
    assert_eq!(
        dimension("mass^(1 + 1)"),
        DimensionVector::MASS.scale(Rational64::from_integer(2))
    );
    assert_eq!(
        dimension("mass^(6 / 4)"),
        DimensionVector::MASS.scale(Rational64::new(3, 2))
    );
    assert_eq!(
        dimension("mass^(2 ^ 3)"),
        DimensionVector::MASS.scale(Rational64::from_integer(8))
    );
    assert_eq!(
        dimension("mass^abs(-2)"),
        DimensionVector::MASS.scale(Rational64::from_integer(2))
    );
}

#[test]
fn test_power_rejects_dimensioned_exponent() {
    let err = run("mass^length").unwrap_err();
    assert_eq!(
        err,
        Error::NonDimensionlessExponent {
            dimension: DimensionVector::LENGTH,
        }
    );
}

#[test]
fn test_power_rejects_non_constant_exponent() {
    // angle is dimensionless but has no statically known value
    assert_eq!(run("mass^angle").unwrap_err(), Error::NonConstantExponent);
    // a division by a zero constant cannot be folded either
    assert_eq!(run("mass^(1 / 0)").unwrap_err(), Error::NonConstantExponent);
    // 2^(1/2) is irrational, so its value is dropped before use
    assert_eq!(run("mass^(2 ^ 0.5)").unwrap_err(), Error::NonConstantExponent);
}

#[test]
fn test_dimensionless_function_accepts_dimensionless_arguments() {
    let analysis = run("sin(angle)").unwrap();
    assert!(analysis.dimension.is_dimensionless());
    assert_eq!(analysis.reconstructed, "sin(angle)");
}

#[test]
fn test_dimensionless_function_rejects_dimensioned_argument() {
    let err = run("sin(length)").unwrap_err();
    assert_eq!(
        err,
        Error::NonDimensionlessArgument {
            function: "sin".into(),
            index: 1,
            dimension: DimensionVector::LENGTH,
        }
    );
}

#[test]
fn test_argument_index_points_at_offender() {
    let err = run("atan(angle, length)").unwrap_err();
    assert_eq!(
        err,
        Error::NonDimensionlessArgument {
            function: "atan".into(),
            index: 2,
            dimension: DimensionVector::LENGTH,
        }
    );
}

#[test]
fn test_function_name_matched_case_insensitively() {
    let analysis = run("SIN(angle)").unwrap();
    assert!(analysis.dimension.is_dimensionless());
    assert_eq!(analysis.reconstructed, "SIN(angle)");
}

#[test]
fn test_sqrt_halves_the_dimension() {
    assert_eq!(dimension("sqrt(area)"), DimensionVector::LENGTH);
    assert_eq!(reconstructed("sqrt(area)"), "sqrt(area)");
}

#[test]
fn test_sqrt_arity() {
    assert_eq!(
        run("sqrt(area, area)").unwrap_err(),
        Error::Arity {
            function: "sqrt",
            expected: 1,
            actual: 2,
        }
    );
    assert_eq!(
        run("sqrt()").unwrap_err(),
        Error::Arity {
            function: "sqrt",
            expected: 1,
            actual: 0,
        }
    );
}

#[test]
fn test_abs_preserves_dimension() {
    assert_eq!(dimension("abs(force)"), DimensionVector::FORCE);
    assert!(matches!(
        run("abs(force, force)").unwrap_err(),
        Error::Arity { function: "abs", .. }
    ));
}

#[test]
fn test_empty_argument_list_for_dimensionless_function() {
    // sin() has no arguments to violate the rule; it is dimensionless
    let analysis = run("sin()").unwrap();
    assert!(analysis.dimension.is_dimensionless());
    assert_eq!(analysis.reconstructed, "sin()");
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        run("sine(angle)").unwrap_err(),
        Error::UnknownFunction {
            name: "sine".into(),
        }
    );
}

#[test]
fn test_unknown_quantity() {
    assert_eq!(
        run("frobnication").unwrap_err(),
        Error::UnknownQuantity {
            name: "frobnication".into(),
        }
    );
}

#[test]
fn test_unexpected_end_of_input() {
    assert_eq!(run("2 +").unwrap_err(), Error::UnexpectedEndOfInput);
    assert_eq!(run("").unwrap_err(), Error::UnexpectedEndOfInput);
    assert_eq!(run("mass *").unwrap_err(), Error::UnexpectedEndOfInput);
}

#[test]
fn test_unbalanced_parens() {
    assert_eq!(run("(mass").unwrap_err(), Error::UnbalancedParens);
    assert_eq!(run("sqrt(area").unwrap_err(), Error::UnbalancedParens);
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(matches!(
        run("mass length").unwrap_err(),
        Error::UnexpectedToken { .. }
    ));
    assert!(matches!(
        run("mass)").unwrap_err(),
        Error::UnexpectedToken { .. }
    ));
}

#[test]
fn test_operand_position_tokens_rejected() {
    assert!(matches!(
        run("* mass").unwrap_err(),
        Error::UnexpectedToken { .. }
    ));
    assert!(matches!(
        run("mass + * length").unwrap_err(),
        Error::UnexpectedToken { .. }
    ));
}

#[test]
fn test_chained_power_is_a_syntax_error() {
    // the grammar gives '^' a single right operand
    assert!(matches!(
        run("mass^2^2").unwrap_err(),
        Error::UnexpectedToken { .. }
    ));
}

#[test]
fn test_deeply_nested_input_fails_cleanly() {
    let mut expression = String::new();
    for _ in 0..300 {
        expression.push('(');
    }
    expression.push_str("mass");
    for _ in 0..300 {
        expression.push(')');
    }
    assert!(matches!(
        run(&expression).unwrap_err(),
        Error::TooDeeplyNested { .. }
    ));
}
