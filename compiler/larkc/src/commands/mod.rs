//! Command implementations for the `lark` binary.
//!
//! Each command returns the process exit status instead of exiting, so
//! `main` stays a thin dispatcher.

mod debug;
mod explain;
mod run;

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use lark_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use lark_diagnostic::Diagnostic;

pub use debug::{lex_file, parse_file};
pub use explain::{describe_code, explain_code};
pub use run::run_file;

pub use crate::error::read_source;

/// How diagnostics are written to stderr.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagnosticFormat {
    #[default]
    Text,
    Json,
}

/// Read `path`, printing the error and returning `None` on failure.
pub(crate) fn read_file(path: &Path) -> Option<String> {
    match read_source(path) {
        Ok(source) => Some(source),
        Err(error) => {
            tracing::debug!(path = %path.display(), "unreadable source");
            eprintln!("error: {error}");
            None
        }
    }
}

/// Write `diagnostics` to stderr in the requested format.
pub(crate) fn report(diagnostics: &[Diagnostic], format: DiagnosticFormat, color: ColorMode) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostics(stderr.lock(), diagnostics, format, color, is_tty);
}

/// Emit `diagnostics` into any writer. JSON output is always a complete
/// array; text output ends with a count line when anything was reported.
pub fn write_diagnostics<W: Write>(
    writer: W,
    diagnostics: &[Diagnostic],
    format: DiagnosticFormat,
    color: ColorMode,
    is_tty: bool,
) {
    match format {
        DiagnosticFormat::Text => {
            if diagnostics.is_empty() {
                return;
            }
            let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty);
            emitter.emit_all(diagnostics);
            emitter.emit_summary(diagnostics.len());
            emitter.flush();
        }
        DiagnosticFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
        }
    }
}
