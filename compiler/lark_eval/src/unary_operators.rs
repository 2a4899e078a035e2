//! Unary operator implementations for the evaluator.

use lark_ir::{UnaryOp, Value};

use crate::errors::EvalErrorKind;

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalErrorKind::NumberOperand),
        },
        UnaryOp::Not => Ok(Value::Boolean(!operand.is_truthy())),
    }
}

#[cfg(test)]
mod tests;
