use pretty_assertions::assert_eq;

use super::*;

#[test]
fn negation() {
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::Number(2.0)),
        Ok(Value::Number(-2.0))
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::text("2")),
        Err(EvalErrorKind::NumberOperand)
    );
}

#[test]
fn not_uses_truthiness() {
    let not = |v: Value| evaluate_unary(UnaryOp::Not, &v);
    assert_eq!(not(Value::text("")), Ok(Value::Boolean(true)));
    assert_eq!(not(Value::text("x")), Ok(Value::Boolean(false)));
    assert_eq!(not(Value::Number(0.0)), Ok(Value::Boolean(true)));
    assert_eq!(not(Value::Number(1.0)), Ok(Value::Boolean(false)));
    assert_eq!(not(Value::Null), Ok(Value::Boolean(true)));
    assert_eq!(not(Value::Boolean(false)), Ok(Value::Boolean(true)));
}

#[test]
fn negative_zero_is_falsy() {
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Number(-0.0)),
        Ok(Value::Boolean(true))
    );
}
