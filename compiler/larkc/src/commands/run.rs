//! The `run` command.

use std::path::Path;

use lark_diagnostic::emitter::ColorMode;
use lark_eval::stdout_handler;

use super::{read_file, report, DiagnosticFormat};
use crate::{run_source, RunConfig, EXIT_NO_INPUT};

/// Execute a source file, printing program output to stdout and
/// diagnostics to stderr.
pub fn run_file(path: &Path, config: &RunConfig, format: DiagnosticFormat, color: ColorMode) -> u8 {
    let Some(source) = read_file(path) else {
        return EXIT_NO_INPUT;
    };

    let outcome = run_source(&source, config, stdout_handler());
    report(&outcome.diagnostics, format, color);
    outcome.exit_code
}
