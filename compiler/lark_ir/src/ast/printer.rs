//! Parenthesized S-expression rendering of the syntax tree.
//!
//! Operators come first, operands follow: `1 + 2 * 3` prints as
//! `(+ 1 (* 2 3))`. Text literals are quoted so that `"1"` and `1` stay
//! distinguishable.

use std::fmt::Write;

use lark_stack::ensure_sufficient_stack;

use super::{Expr, Stmt};
use crate::Value;

/// Render a single expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Render a single statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    write_stmt(&mut out, stmt);
    out
}

/// Render a program, one top-level statement per line.
pub fn print_program(statements: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in statements {
        write_stmt(&mut out, stmt);
        out.push('\n');
    }
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| write_expr_inner(out, expr));
}

fn write_expr_inner(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(value) => write_literal(out, value),
        Expr::Grouping(inner) => {
            out.push_str("(group ");
            write_expr(out, inner);
            out.push(')');
        }
        Expr::Unary { op, operand, .. } => {
            let _ = write!(out, "({} ", op.as_symbol());
            write_expr(out, operand);
            out.push(')');
        }
        Expr::Binary {
            left, op, right, ..
        } => {
            let _ = write!(out, "({} ", op.as_symbol());
            write_expr(out, left);
            out.push(' ');
            write_expr(out, right);
            out.push(')');
        }
        Expr::Logical { left, op, right } => {
            let _ = write!(out, "({} ", op.as_symbol());
            write_expr(out, left);
            out.push(' ');
            write_expr(out, right);
            out.push(')');
        }
        Expr::Assign { target, value } => {
            let _ = write!(out, "(= {} ", target.name);
            write_expr(out, value);
            out.push(')');
        }
        Expr::Variable(ident) => out.push_str(&ident.name),
    }
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Text(s) => {
            let _ = write!(out, "\"{s}\"");
        }
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt) {
    ensure_sufficient_stack(|| write_stmt_inner(out, stmt));
}

fn write_stmt_inner(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Expression(expr) => write_expr(out, expr),
        Stmt::Print(expr) => {
            out.push_str("(print ");
            write_expr(out, expr);
            out.push(')');
        }
        Stmt::Var { name, initializer } => {
            let _ = write!(out, "(var {} ", name.name);
            write_expr(out, initializer);
            out.push(')');
        }
        Stmt::Block(statements) => {
            out.push_str("(block");
            for inner in statements {
                out.push(' ');
                write_stmt(out, inner);
            }
            out.push(')');
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("(if ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, then_branch);
            if let Some(else_branch) = else_branch {
                out.push(' ');
                write_stmt(out, else_branch);
            }
            out.push(')');
        }
        Stmt::While { condition, body } => {
            out.push_str("(while ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, body);
            out.push(')');
        }
    }
}
