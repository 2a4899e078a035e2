//! Expression nodes.

use std::mem;

use super::{BinaryOp, LogicalOp, UnaryOp};
use crate::Value;

/// A variable reference as written in the source.
///
/// Keeps the line so that "undefined variable" errors point at the use site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub line: u32,
}

impl Ident {
    pub fn new(name: impl Into<String>, line: u32) -> Self {
        Ident {
            name: name.into(),
            line,
        }
    }
}

/// Expression node.
///
/// Operator nodes carry the line of their operator token, which is where
/// runtime type errors are reported.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `1`, `"text"`, `true`, `false`, `null`
    Literal(Value),

    /// `( expr )`
    Grouping(Box<Expr>),

    /// `-x`, `!x`
    Unary {
        op: UnaryOp,
        line: u32,
        operand: Box<Expr>,
    },

    /// `left op right` for arithmetic, equality and comparison operators.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        line: u32,
        right: Box<Expr>,
    },

    /// `left and right`, `left or right`
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },

    /// `name = value`
    Assign { target: Ident, value: Box<Expr> },

    /// `name`
    Variable(Ident),
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, line: u32, operand: Expr) -> Self {
        Expr::Unary {
            op,
            line,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, line: u32, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            line,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn assign(target: Ident, value: Expr) -> Self {
        Expr::Assign {
            target,
            value: Box::new(value),
        }
    }

    pub fn variable(name: impl Into<String>, line: u32) -> Self {
        Expr::Variable(Ident::new(name, line))
    }

    /// Returns the variable if this expression is a bare variable reference.
    ///
    /// Only bare variables are valid assignment targets; `(x) = 1` is not.
    pub fn as_variable(&self) -> Option<&Ident> {
        match self {
            Expr::Variable(ident) => Some(ident),
            _ => None,
        }
    }

    const fn is_leaf(&self) -> bool {
        matches!(self, Expr::Literal(_) | Expr::Variable(_))
    }

    /// Move every non-leaf child into `out`, leaving `null` literals behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::Grouping(inner) => detach(inner, out),
            Expr::Unary { operand, .. } => detach(operand, out),
            Expr::Assign { value, .. } => detach(value, out),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                detach(left, out);
                detach(right, out);
            }
        }
    }
}

fn detach(slot: &mut Expr, out: &mut Vec<Expr>) {
    if !slot.is_leaf() {
        out.push(mem::replace(slot, Expr::Literal(Value::Null)));
    }
}

/// Drops nested expressions from a heap worklist, so tearing down a deep
/// tree uses constant native stack.
impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
