//! End-to-end tests: source text in, program output and diagnostics out.

use lark_eval::{buffer_handler, ScopeMode};
use larkc::{run_source, RunConfig, RunOutcome, EXIT_DATA_ERR, EXIT_OK, EXIT_SOFTWARE};
use pretty_assertions::assert_eq;

fn run_with(source: &str, config: &RunConfig) -> (String, Vec<String>, u8) {
    let handler = buffer_handler();
    let RunOutcome {
        diagnostics,
        exit_code,
    } = run_source(source, config, handler.clone());
    let rendered = diagnostics.iter().map(ToString::to_string).collect();
    (handler.get_output(), rendered, exit_code)
}

fn run(source: &str) -> (String, Vec<String>, u8) {
    run_with(source, &RunConfig::default())
}

fn output(source: &str) -> String {
    let (out, diagnostics, code) = run(source);
    assert_eq!(diagnostics, Vec::<String>::new());
    assert_eq!(code, EXIT_OK);
    out
}

#[test]
fn arithmetic_and_concatenation() {
    assert_eq!(output("print 1 + 2;"), "3\n");
    assert_eq!(output("print \"a\" + \"b\";"), "ab\n");
    assert_eq!(output("print 0.1 + 0.2;"), "0.30000000000000004\n");
    assert_eq!(output("print 7 % 3; print -7 % 3;"), "1\n-1\n");
    assert_eq!(output("print 1 / 0; print -1 / 0; print 0 / 0;"), "Infinity\n-Infinity\nNaN\n");
}

#[test]
fn mixed_add_is_a_runtime_error() {
    let (out, diagnostics, code) = run("print \"a\" + 1;");
    assert_eq!(out, "");
    assert_eq!(
        diagnostics,
        vec!["[line 1] Runtime error: operands must be two numbers or two strings"]
    );
    assert_eq!(code, EXIT_SOFTWARE);
}

#[test]
fn truthiness() {
    assert_eq!(
        output("print !\"\"; print !!\"\"; print !0; print !1;"),
        "true\nfalse\ntrue\nfalse\n"
    );
}

#[test]
fn equality() {
    assert_eq!(
        output("print 1 == 1; print null == null; print null == 0; print \"1\" == 1;"),
        "true\ntrue\nfalse\nfalse\n"
    );
}

#[test]
fn number_equality_distinguishes_signed_zero_and_matches_nan() {
    assert_eq!(
        output("print 0 == -0; var n = 0 / 0; print n == n; print n != n;"),
        "false\ntrue\nfalse\n"
    );
}

#[test]
fn flat_blocks_share_one_environment() {
    assert_eq!(output("var x = 1; { x = 2; } print x;"), "2\n");
    assert_eq!(output("{ var y = 3; } print y;"), "3\n");
}

#[test]
fn lexical_scoping_is_opt_in() {
    let config = RunConfig {
        scoping: ScopeMode::Lexical,
        ..RunConfig::default()
    };
    let (out, diagnostics, code) =
        run_with("var x = 1; { var x = 2; print x; } print x;", &config);
    assert_eq!(out, "2\n1\n");
    assert!(diagnostics.is_empty());
    assert_eq!(code, EXIT_OK);

    let (_, diagnostics, code) = run_with("{ var y = 3; }\nprint y;", &config);
    assert_eq!(diagnostics, vec!["[line 2] Runtime error: undefined variable 'y'"]);
    assert_eq!(code, EXIT_SOFTWARE);
}

#[test]
fn for_loop_counts() {
    assert_eq!(
        output("for (var i = 0; i < 3; i = i + 1) print i;"),
        "0\n1\n2\n"
    );
}

#[test]
fn while_and_logical_operators() {
    let source = "
        var n = 0;
        while (n < 5) n = n + 1;
        print n;
        print nil_free or \"fallback\";
    ";
    let (out, diagnostics, code) = run(source);
    assert_eq!(out, "5\n");
    assert_eq!(
        diagnostics,
        vec!["[line 5] Runtime error: undefined variable 'nil_free'"]
    );
    assert_eq!(code, EXIT_SOFTWARE);

    assert_eq!(output("print null or \"fallback\"; print 0 and 1;"), "fallback\n0\n");
}

#[test]
fn undefined_variable_produces_one_error_and_no_output() {
    let (out, diagnostics, code) = run("print y;");
    assert_eq!(out, "");
    assert_eq!(diagnostics, vec!["[line 1] Runtime error: undefined variable 'y'"]);
    assert_eq!(code, EXIT_SOFTWARE);
}

#[test]
fn execution_stops_at_first_runtime_error() {
    let (out, diagnostics, _) = run("print 1;\nx = 2;\nprint 3;");
    assert_eq!(out, "1\n");
    assert_eq!(
        diagnostics,
        vec!["[line 2] Runtime error: cannot assign to undeclared variable 'x'"]
    );
}

#[test]
fn missing_brace_is_one_syntax_error_and_nothing_runs() {
    let (out, diagnostics, code) = run("print 1;\n{ print 2;");
    assert_eq!(out, "");
    assert_eq!(diagnostics, vec!["[line 2] Error at end: expected `}` after block"]);
    assert_eq!(code, EXIT_DATA_ERR);
}

#[test]
fn lexical_errors_block_evaluation() {
    let (out, diagnostics, code) = run("print 1;\nprint \"open");
    assert_eq!(out, "");
    assert_eq!(diagnostics[0], "[line 2] Error: unterminated string");
    assert_eq!(code, EXIT_DATA_ERR);
}

#[test]
fn recovery_reports_every_statement_error() {
    let config = RunConfig {
        recover: true,
        ..RunConfig::default()
    };
    let (out, diagnostics, code) = run_with("print ;\nvar = 1;\nprint 3;", &config);
    assert_eq!(out, "");
    assert_eq!(
        diagnostics,
        vec![
            "[line 1] Error at ';': expected expression",
            "[line 2] Error at '=': expected identifier after `var`",
        ]
    );
    assert_eq!(code, EXIT_DATA_ERR);

    let (_, diagnostics, _) = run("print ;\nvar = 1;\nprint 3;");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn running_twice_is_deterministic() {
    let sources = [
        "var a = 1; while (a < 100) a = a * 2; print a;",
        "print -\"x\";",
        "{ print 1;",
        "print @;",
    ];
    for source in sources {
        assert_eq!(run(source), run(source));
    }
}

const DEEP: usize = 200_000;

#[test]
fn deeply_nested_programs_run_and_tear_down() {
    let groups = format!("print {}1{};", "(".repeat(DEEP), ")".repeat(DEEP));
    assert_eq!(output(&groups), "1\n");

    let negations = format!("print {}true;", "!".repeat(DEEP));
    assert_eq!(output(&negations), "true\n");

    let blocks = format!(
        "var n = 0; {} n = n + 1; {} print n;",
        "{".repeat(DEEP),
        "}".repeat(DEEP)
    );
    assert_eq!(output(&blocks), "1\n");

    let config = RunConfig {
        scoping: ScopeMode::Lexical,
        ..RunConfig::default()
    };
    let (out, diagnostics, code) = run_with(&blocks, &config);
    assert_eq!((out.as_str(), diagnostics.len(), code), ("1\n", 0, EXIT_OK));
}

#[test]
fn deeply_nested_tree_prints_and_drops() {
    let source = format!("print {}1{};", "(".repeat(DEEP), ")".repeat(DEEP));
    let lexed = lark_lexer::lex(&source);
    let parsed = lark_parse::parse(&lexed.tokens);
    assert!(!parsed.has_errors());

    let printed = lark_ir::ast::printer::print_program(&parsed.statements);
    assert!(printed.starts_with("(print (group (group"));
    assert!(printed.ends_with("))\n"));
    drop(parsed);
}

#[test]
fn deeply_nested_syntax_error_is_reported_once() {
    let source = format!("print {}1;", "(".repeat(DEEP));
    let (out, diagnostics, code) = run(&source);
    assert_eq!(out, "");
    assert_eq!(
        diagnostics,
        vec!["[line 1] Error at ';': expected `)` after expression"]
    );
    assert_eq!(code, EXIT_DATA_ERR);
}
