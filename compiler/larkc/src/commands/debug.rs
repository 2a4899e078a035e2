//! Inspection commands: dump tokens or the parsed tree.

use std::path::Path;

use lark_diagnostic::emitter::ColorMode;
use lark_ir::ast::printer::print_program;
use lark_parse::ParseOptions;

use super::{read_file, report, DiagnosticFormat};
use crate::{format_token, EXIT_DATA_ERR, EXIT_NO_INPUT, EXIT_OK};

/// Print every token of `path`, one per line.
pub fn lex_file(path: &Path, color: ColorMode) -> u8 {
    let Some(source) = read_file(path) else {
        return EXIT_NO_INPUT;
    };

    let lexed = lark_lexer::lex(&source);
    for token in &lexed.tokens {
        println!("{}", format_token(token));
    }

    if lexed.has_errors() {
        report(&lexed.diagnostics(), DiagnosticFormat::Text, color);
        return EXIT_DATA_ERR;
    }
    EXIT_OK
}

/// Print the parsed program of `path` as s-expressions.
///
/// Statements parsed before an error are still printed.
pub fn parse_file(path: &Path, recover: bool, color: ColorMode) -> u8 {
    let Some(source) = read_file(path) else {
        return EXIT_NO_INPUT;
    };

    let lexed = lark_lexer::lex(&source);
    let parsed = lark_parse::parse_with_options(&lexed.tokens, ParseOptions { recover });
    print!("{}", print_program(&parsed.statements));

    let mut diagnostics = lexed.diagnostics();
    diagnostics.extend(parsed.diagnostics());
    if diagnostics.is_empty() {
        return EXIT_OK;
    }
    report(&diagnostics, DiagnosticFormat::Text, color);
    EXIT_DATA_ERR
}
