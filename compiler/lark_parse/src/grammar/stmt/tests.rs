//! Statement grammar tests.

use lark_ir::ast::printer::print_program;
use pretty_assertions::assert_eq;

use crate::parse;

fn program(source: &str) -> String {
    let lexed = lark_lexer::lex(source);
    let out = parse(&lexed.tokens);
    assert!(out.errors.is_empty(), "{:?}", out.errors);
    print_program(&out.statements)
}

fn error_text(source: &str) -> Vec<String> {
    let lexed = lark_lexer::lex(source);
    parse(&lexed.tokens)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn print_and_var() {
    assert_eq!(
        program("var x = 1; print x;"),
        "(var x 1)\n(print x)\n"
    );
}

#[test]
fn blocks_nest() {
    assert_eq!(program("{ print 1; { } }"), "(block (print 1) (block))\n");
}

#[test]
fn if_else_binds_to_nearest_if() {
    assert_eq!(
        program("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))\n"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        program("while (i < 3) i = i + 1;"),
        "(while (< i 3) (= i (+ i 1)))\n"
    );
}

#[test]
fn var_allowed_as_branch() {
    assert_eq!(program("if (c) var x = 1;"), "(if c (var x 1))\n");
}

#[test]
fn for_desugars_fully() {
    assert_eq!(
        program("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 3) (block (print i) (= i (+ i 1)))))\n"
    );
}

#[test]
fn for_without_clauses() {
    assert_eq!(program("for (;;) print 1;"), "(while true (print 1))\n");
}

#[test]
fn for_with_expression_initializer() {
    assert_eq!(
        program("for (i = 0; i < 1;) print i;"),
        "(block (= i 0) (while (< i 1) (print i)))\n"
    );
}

#[test]
fn missing_semicolon() {
    assert_eq!(
        error_text("print 1\nprint 2;"),
        vec!["[line 2] Error at 'print': expected `;` after value"]
    );
}

#[test]
fn missing_closing_brace_reports_at_end() {
    assert_eq!(
        error_text("{ print 1;"),
        vec!["[line 1] Error at end: expected `}` after block"]
    );
}

#[test]
fn var_requires_name_and_initializer() {
    assert_eq!(
        error_text("var = 1;"),
        vec!["[line 1] Error at '=': expected identifier after `var`"]
    );
    assert_eq!(
        error_text("var x;"),
        vec!["[line 1] Error at ';': expected `=` after variable name"]
    );
}

#[test]
fn control_flow_requires_parens() {
    assert_eq!(
        error_text("if x print 1;"),
        vec!["[line 1] Error at 'x': expected `(` after `if`"]
    );
    assert_eq!(
        error_text("while (x print 1;"),
        vec!["[line 1] Error at 'print': expected `)` after while condition"]
    );
    assert_eq!(
        error_text("for (;; print 1;"),
        vec!["[line 1] Error at 'print': expected expression"]
    );
}
