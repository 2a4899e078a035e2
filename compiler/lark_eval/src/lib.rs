//! Tree-walking evaluator for Lark.
//!
//! [`interpret`] runs a parsed program with the default configuration (flat
//! scoping, stdout). Use [`InterpreterBuilder`] to pick the scoping mode or
//! capture output.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod unary_operators;

use lark_diagnostic::Diagnostic;
use lark_ir::Stmt;

pub use environment::{AssignError, Environment, ScopeMode};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;

/// Outcome of one program execution: at most one runtime error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOutput {
    pub error: Option<EvalError>,
}

impl EvalOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.error.iter().map(EvalError::to_diagnostic).collect()
    }
}

/// Execute `statements` with flat scoping, printing to stdout.
pub fn interpret(statements: &[Stmt]) -> EvalOutput {
    Interpreter::new().run(statements)
}
