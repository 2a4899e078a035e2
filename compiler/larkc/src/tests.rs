use lark_eval::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn clean_run_exits_zero() {
    let handler = buffer_handler();
    let outcome = run_source("print 1 + 2;", &RunConfig::default(), handler.clone());
    assert_eq!(outcome.exit_code, EXIT_OK);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(handler.get_output(), "3\n");
}

#[test]
fn lex_and_parse_errors_are_combined() {
    let outcome = run_source("print #;", &RunConfig::default(), silent_handler());
    assert_eq!(outcome.exit_code, EXIT_DATA_ERR);
    let rendered: Vec<String> = outcome.diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "[line 1] Error: unexpected character '#'",
            "[line 1] Error at ';': expected expression",
        ]
    );
}

#[test]
fn runtime_error_exits_seventy() {
    let outcome = run_source("print -true;", &RunConfig::default(), silent_handler());
    assert_eq!(outcome.exit_code, EXIT_SOFTWARE);
    assert_eq!(outcome.diagnostics.len(), 1);
}

#[test]
fn token_formatting() {
    let lexed = lark_lexer::lex("var s = \"hi\";\n1.5");
    let lines: Vec<String> = lexed.tokens.iter().map(format_token).collect();
    assert_eq!(
        lines,
        vec![
            "1 Var 'var'",
            "1 Identifier 's'",
            "1 Equal '='",
            "1 String '\"hi\"' \"hi\"",
            "1 Semicolon ';'",
            "2 Number '1.5' 1.5",
            "2 Eof ''",
        ]
    );
}
