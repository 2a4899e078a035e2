//! Runtime error types.
//!
//! Operator helpers return a bare [`EvalErrorKind`]; the interpreter attaches
//! the line of the operator or name token to make an [`EvalError`].

use lark_diagnostic::{Diagnostic, ErrorCode, Phase};
use lark_ir::Value;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    /// `+` on anything but two numbers or two strings.
    #[error("operands must be two numbers or two strings")]
    InvalidAddOperands,

    /// Arithmetic or comparison on a non-number.
    #[error("operands must be numbers")]
    NumberOperands,

    /// Unary `-` on a non-number.
    #[error("operand must be a number")]
    NumberOperand,

    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("cannot assign to undeclared variable '{0}'")]
    UndeclaredAssignment(String),
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::InvalidAddOperands
            | EvalErrorKind::NumberOperands
            | EvalErrorKind::NumberOperand => ErrorCode::E6001,
            EvalErrorKind::UndefinedVariable(_) => ErrorCode::E6002,
            EvalErrorKind::UndeclaredAssignment(_) => ErrorCode::E6003,
        }
    }
}

/// A runtime error at a source line. Halts execution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("[line {line}] Runtime error: {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind.code(), Phase::Runtime, self.line, self.kind.to_string())
    }
}

impl From<&EvalError> for Diagnostic {
    fn from(error: &EvalError) -> Self {
        error.to_diagnostic()
    }
}

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

#[cold]
pub fn undefined_variable(name: &str, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable(name.to_owned()), line)
}

#[cold]
pub fn undeclared_assignment(name: &str, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::UndeclaredAssignment(name.to_owned()), line)
}

#[cfg(test)]
mod tests;
