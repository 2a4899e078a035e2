use pretty_assertions::assert_eq;

use super::printer::{print_expr, print_program, print_stmt};
use super::*;
use crate::{TokenKind, Value};

fn num(n: f64) -> Expr {
    Expr::literal(n)
}

#[test]
fn binary_op_symbols_round_trip_through_tokens() {
    let pairs = [
        (TokenKind::Plus, BinaryOp::Add),
        (TokenKind::Minus, BinaryOp::Sub),
        (TokenKind::Star, BinaryOp::Mul),
        (TokenKind::Slash, BinaryOp::Div),
        (TokenKind::Percent, BinaryOp::Mod),
        (TokenKind::EqualEqual, BinaryOp::Eq),
        (TokenKind::BangEqual, BinaryOp::NotEq),
        (TokenKind::Less, BinaryOp::Lt),
        (TokenKind::LessEqual, BinaryOp::LtEq),
        (TokenKind::Greater, BinaryOp::Gt),
        (TokenKind::GreaterEqual, BinaryOp::GtEq),
    ];
    for (kind, op) in pairs {
        assert_eq!(BinaryOp::from_token(kind), Some(op));
    }
    assert_eq!(BinaryOp::from_token(TokenKind::Bang), None);
    assert_eq!(BinaryOp::from_token(TokenKind::Equal), None);
}

#[test]
fn unary_ops_from_tokens() {
    assert_eq!(UnaryOp::from_token(TokenKind::Minus), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_token(TokenKind::Plus), None);
}

#[test]
fn only_bare_variables_are_assignable() {
    assert_eq!(
        Expr::variable("x", 1).as_variable(),
        Some(&Ident::new("x", 1))
    );
    assert_eq!(Expr::grouping(Expr::variable("x", 1)).as_variable(), None);
    assert_eq!(num(1.0).as_variable(), None);
}

#[test]
fn prints_nested_binary() {
    let expr = Expr::binary(
        num(1.0),
        BinaryOp::Add,
        1,
        Expr::binary(num(2.0), BinaryOp::Mul, 1, num(3.0)),
    );
    assert_eq!(print_expr(&expr), "(+ 1 (* 2 3))");
}

#[test]
fn prints_grouping_unary_and_logical() {
    let expr = Expr::logical(
        Expr::unary(UnaryOp::Not, 1, Expr::grouping(Expr::variable("a", 1))),
        LogicalOp::Or,
        Expr::unary(UnaryOp::Neg, 1, num(2.5)),
    );
    assert_eq!(print_expr(&expr), "(or (! (group a)) (- 2.5))");
}

#[test]
fn prints_literals() {
    assert_eq!(print_expr(&Expr::literal("hi")), "\"hi\"");
    assert_eq!(print_expr(&Expr::Literal(Value::Null)), "null");
    assert_eq!(print_expr(&Expr::literal(true)), "true");
}

#[test]
fn prints_statements() {
    let assign = Stmt::Expression(Expr::assign(Ident::new("x", 1), num(1.0)));
    assert_eq!(print_stmt(&assign), "(= x 1)");

    let decl = Stmt::var(Ident::new("x", 1), num(1.0));
    assert_eq!(print_stmt(&decl), "(var x 1)");

    let branch = Stmt::if_else(
        Expr::variable("c", 1),
        Stmt::Print(Expr::variable("a", 1)),
        Some(Stmt::Print(Expr::variable("b", 1))),
    );
    assert_eq!(print_stmt(&branch), "(if c (print a) (print b))");

    let no_else = Stmt::if_else(Expr::literal(true), Stmt::Block(Vec::new()), None);
    assert_eq!(print_stmt(&no_else), "(if true (block))");
}

#[test]
fn prints_program_lines() {
    let program = vec![
        Stmt::var(Ident::new("i", 1), num(0.0)),
        Stmt::while_loop(
            Expr::binary(Expr::variable("i", 2), BinaryOp::Lt, 2, num(3.0)),
            Stmt::Block(vec![
                Stmt::Print(Expr::variable("i", 2)),
                Stmt::Expression(Expr::assign(
                    Ident::new("i", 2),
                    Expr::binary(Expr::variable("i", 2), BinaryOp::Add, 2, num(1.0)),
                )),
            ]),
        ),
    ];
    assert_eq!(
        print_program(&program),
        "(var i 0)\n(while (< i 3) (block (print i) (= i (+ i 1))))\n"
    );
}

#[test]
fn stmt_kind_names() {
    assert_eq!(Stmt::Block(Vec::new()).kind_name(), "block");
    assert_eq!(Stmt::Print(num(1.0)).kind_name(), "print");
}

const DEEP: usize = 200_000;

#[test]
fn deep_expression_prints_and_drops() {
    let mut expr = num(1.0);
    for _ in 0..DEEP {
        expr = Expr::grouping(expr);
    }
    let printed = print_expr(&expr);
    assert!(printed.starts_with("(group (group"));
    assert_eq!(printed.len(), DEEP * "(group ".len() + 1 + DEEP);
    drop(expr);
}

#[test]
fn deep_mixed_expression_drops() {
    let mut expr = Expr::variable("x", 1);
    for i in 0..DEEP {
        expr = match i % 4 {
            0 => Expr::unary(UnaryOp::Not, 1, expr),
            1 => Expr::binary(num(2.0), BinaryOp::Mul, 1, expr),
            2 => Expr::logical(expr, LogicalOp::Or, num(0.0)),
            _ => Expr::assign(Ident::new("x", 1), expr),
        };
    }
    assert!(print_expr(&expr).starts_with("(= x (or"));
}

#[test]
fn deep_statement_nesting_prints_and_drops() {
    let mut stmt = Stmt::Print(num(1.0));
    for i in 0..DEEP {
        stmt = match i % 3 {
            0 => Stmt::Block(vec![Stmt::Expression(num(0.0)), stmt]),
            1 => Stmt::if_else(Expr::literal(true), stmt, Some(Stmt::Block(Vec::new()))),
            _ => Stmt::while_loop(Expr::literal(false), stmt),
        };
    }
    let printed = print_program(std::slice::from_ref(&stmt));
    assert!(printed.starts_with("(if true (block 0 (while false"));
    assert!(printed.ends_with('\n'));
    drop(stmt);
}
