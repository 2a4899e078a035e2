//! Lark driver.
//!
//! Wires the scanner, parser and evaluator together. [`run_source`] is the
//! whole pipeline as a pure function of its inputs: it returns every
//! diagnostic and the process exit code instead of printing or exiting, so
//! the `lark` binary and tests share one code path.

pub mod commands;
mod error;
mod tracing_setup;

use lark_diagnostic::Diagnostic;
use lark_eval::{InterpreterBuilder, ScopeMode, SharedPrintHandler};
use lark_ir::Token;
use lark_parse::ParseOptions;
use tracing::debug;

pub use error::CliError;
pub use tracing_setup::init_tracing;

/// Exit status for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit status for a malformed command-line argument.
pub const EXIT_USAGE: u8 = 64;
/// Exit status when lexing or parsing failed.
pub const EXIT_DATA_ERR: u8 = 65;
/// Exit status when the source file cannot be read.
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit status when execution stopped at a runtime error.
pub const EXIT_SOFTWARE: u8 = 70;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub scoping: ScopeMode,
    /// Keep parsing after a syntax error to report more of them.
    pub recover: bool,
}

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Lexical and syntax errors in source order, or the single runtime error.
    pub diagnostics: Vec<Diagnostic>,
    pub exit_code: u8,
}

/// Lex, parse and (if both succeeded) execute `source`.
///
/// Evaluation is skipped when any lexical or syntax error was found.
pub fn run_source(source: &str, config: &RunConfig, print_handler: SharedPrintHandler) -> RunOutcome {
    let lexed = lark_lexer::lex(source);
    let parsed = lark_parse::parse_with_options(
        &lexed.tokens,
        ParseOptions {
            recover: config.recover,
        },
    );

    let mut diagnostics = lexed.diagnostics();
    diagnostics.extend(parsed.diagnostics());
    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "skipping evaluation");
        return RunOutcome {
            diagnostics,
            exit_code: EXIT_DATA_ERR,
        };
    }

    let mut interpreter = InterpreterBuilder::new()
        .scope_mode(config.scoping)
        .print_handler(print_handler)
        .build();
    let evaluated = interpreter.run(&parsed.statements);

    let exit_code = if evaluated.is_ok() {
        EXIT_OK
    } else {
        EXIT_SOFTWARE
    };
    RunOutcome {
        diagnostics: evaluated.diagnostics(),
        exit_code,
    }
}

/// One line of `lark lex` output: `<line> <KIND> '<lexeme>' [literal]`.
pub fn format_token(token: &Token) -> String {
    match &token.literal {
        Some(literal) => format!("{} {:?} '{}' {literal}", token.line, token.kind, token.lexeme),
        None => format!("{} {:?} '{}'", token.line, token.kind, token.lexeme),
    }
}

#[cfg(test)]
mod tests;
