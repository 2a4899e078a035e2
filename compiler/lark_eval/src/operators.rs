//! Binary operator implementations for the evaluator.
//!
//! The value set is closed, so dispatch is a plain `match` on the operator
//! and then on the operand variants. Numeric results follow IEEE-754:
//! division and remainder by zero give infinities or `NaN`, never an error.

use lark_ir::{BinaryOp, Value};

use crate::errors::EvalErrorKind;

/// Apply a binary operator to two evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => arithmetic(&left, &right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(&left, &right, |a, b| a * b),
        BinaryOp::Div => arithmetic(&left, &right, |a, b| a / b),
        // Truncated remainder: the sign follows the dividend.
        BinaryOp::Mod => arithmetic(&left, &right, |a, b| a % b),
        BinaryOp::Lt => compare(&left, &right, |a, b| a < b),
        BinaryOp::LtEq => compare(&left, &right, |a, b| a <= b),
        BinaryOp::Gt => compare(&left, &right, |a, b| a > b),
        BinaryOp::GtEq => compare(&left, &right, |a, b| a >= b),
    }
}

/// `+` adds numbers or concatenates strings. Mixed operands are an error.
fn add(left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Text(mut a), Value::Text(b)) => {
            a.push_str(&b);
            Ok(Value::Text(a))
        }
        _ => Err(EvalErrorKind::InvalidAddOperands),
    }
}

#[inline]
fn numbers(left: &Value, right: &Value) -> Result<(f64, f64), EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(EvalErrorKind::NumberOperands),
    }
}

#[inline]
fn arithmetic(left: &Value, right: &Value, f: fn(f64, f64) -> f64) -> Result<Value, EvalErrorKind> {
    let (a, b) = numbers(left, right)?;
    Ok(Value::Number(f(a, b)))
}

#[inline]
fn compare(left: &Value, right: &Value, f: fn(f64, f64) -> bool) -> Result<Value, EvalErrorKind> {
    let (a, b) = numbers(left, right)?;
    Ok(Value::Boolean(f(a, b)))
}
