//! Unit tests for the expression lexer module

use mensura_analyzer::lexer::tokenize;
use mensura_analyzer::token::TokenKind;
use mensura_analyzer::Error;
use num_rational::Rational64;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_tokenize_expression() {
    assert_eq!(
        kinds("force * (distance + height)"),
        vec![
            TokenKind::Identifier("force".into()),
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Identifier("distance".into()),
            TokenKind::Plus,
            TokenKind::Identifier("height".into()),
            TokenKind::CloseParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_characters() {
    assert_eq!(
        kinds("wave_length2"),
        vec![TokenKind::Identifier("wave_length2".into()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_must_start_alphabetic() {
    // A leading underscore is not an identifier start.
    assert_eq!(
        tokenize("_x").unwrap_err(),
        Error::Lex {
            character: '_',
            position: 0,
        }
    );
}

#[test]
fn test_number_values_are_exact() {
    assert_eq!(
        kinds("0.1"),
        vec![TokenKind::Number(Rational64::new(1, 10)), TokenKind::Eof]
    );
    assert_eq!(
        kinds("10"),
        vec![TokenKind::Number(Rational64::from_integer(10)), TokenKind::Eof]
    );
}

#[test]
fn test_number_adjacent_to_identifier() {
    // "2x" lexes as a number then an identifier; the parser rejects it later.
    assert_eq!(
        kinds("2x"),
        vec![
            TokenKind::Number(Rational64::from_integer(2)),
            TokenKind::Identifier("x".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_error_carries_character_and_position() {
    assert_eq!(
        tokenize("mass @ 2").unwrap_err(),
        Error::Lex {
            character: '@',
            // position in the whitespace-stripped input "mass@2"
            position: 4,
        }
    );
}

#[test]
fn test_multiple_decimal_points_rejected() {
    assert!(matches!(
        tokenize("3.1.4").unwrap_err(),
        Error::Lex { character: '.', .. }
    ));
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(kinds("   "), vec![TokenKind::Eof]);
}
