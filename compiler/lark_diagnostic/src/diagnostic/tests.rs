use pretty_assertions::assert_eq;

use super::*;

#[test]
fn renders_lexical_error() {
    let diag = Diagnostic::new(ErrorCode::E0001, Phase::Lex, 3, "unterminated string");
    assert_eq!(diag.to_string(), "[line 3] Error: unterminated string");
}

#[test]
fn renders_syntax_error_with_location() {
    let diag = Diagnostic::new(ErrorCode::E1001, Phase::Parse, 1, "expected `;` after value")
        .with_location("at 'print'");
    assert_eq!(
        diag.to_string(),
        "[line 1] Error at 'print': expected `;` after value"
    );

    let at_end = Diagnostic::new(ErrorCode::E1001, Phase::Parse, 7, "expected `}` after block")
        .with_location("at end");
    assert_eq!(at_end.to_string(), "[line 7] Error at end: expected `}` after block");
}

#[test]
fn renders_runtime_error() {
    let diag = Diagnostic::new(ErrorCode::E6002, Phase::Runtime, 2, "undefined variable 'y'");
    assert!(diag.is_runtime());
    assert_eq!(diag.to_string(), "[line 2] Runtime error: undefined variable 'y'");
}

#[test]
fn phase_names() {
    assert_eq!(Phase::Lex.to_string(), "lex");
    assert_eq!(Phase::Parse.as_str(), "parse");
    assert_eq!(Phase::Runtime.as_str(), "runtime");
}
