use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages() {
    assert_eq!(
        EvalErrorKind::InvalidAddOperands.to_string(),
        "operands must be two numbers or two strings"
    );
    assert_eq!(EvalErrorKind::NumberOperands.to_string(), "operands must be numbers");
    assert_eq!(EvalErrorKind::NumberOperand.to_string(), "operand must be a number");
    assert_eq!(
        undefined_variable("y", 1).kind.to_string(),
        "undefined variable 'y'"
    );
    assert_eq!(
        undeclared_assignment("z", 1).kind.to_string(),
        "cannot assign to undeclared variable 'z'"
    );
}

#[test]
fn codes() {
    assert_eq!(EvalErrorKind::NumberOperand.code(), ErrorCode::E6001);
    assert_eq!(undefined_variable("y", 1).kind.code(), ErrorCode::E6002);
    assert_eq!(undeclared_assignment("y", 1).kind.code(), ErrorCode::E6003);
}

#[test]
fn renders_as_runtime_diagnostic() {
    let err = undefined_variable("y", 4);
    let diag = err.to_diagnostic();
    assert_eq!(diag.phase, Phase::Runtime);
    assert_eq!(diag.line, 4);
    assert_eq!(diag.to_string(), "[line 4] Runtime error: undefined variable 'y'");
    assert_eq!(err.to_string(), diag.to_string());
}
