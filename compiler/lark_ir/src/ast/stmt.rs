//! Statement nodes.

use std::mem;

use super::{Expr, Ident};

/// Statement node.
///
/// There is no `For` variant: the parser rewrites `for` loops into
/// `Block`/`While` combinations.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `expr;`
    Expression(Expr),

    /// `print expr;`
    Print(Expr),

    /// `var name = initializer;`
    Var { name: Ident, initializer: Expr },

    /// `{ stmts }`
    Block(Vec<Stmt>),

    /// `if (condition) then_branch else else_branch`
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while (condition) body`
    While { condition: Expr, body: Box<Stmt> },
}

impl Stmt {
    pub fn var(name: Ident, initializer: Expr) -> Self {
        Stmt::Var { name, initializer }
    }

    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Short name of the statement kind, for tracing.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Expression(_) => "expression",
            Stmt::Print(_) => "print",
            Stmt::Var { .. } => "var",
            Stmt::Block(_) => "block",
            Stmt::If { .. } => "if",
            Stmt::While { .. } => "while",
        }
    }
}

impl Stmt {
    fn has_children(&self) -> bool {
        match self {
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => false,
            Stmt::Block(statements) => !statements.is_empty(),
            Stmt::If { .. } | Stmt::While { .. } => true,
        }
    }

    /// Move nested statements into `out`, leaving empty blocks behind.
    fn detach_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => {}
            Stmt::Block(statements) => out.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                detach(then_branch, out);
                if let Some(mut else_branch) = else_branch.take() {
                    detach(&mut else_branch, out);
                }
            }
            Stmt::While { body, .. } => detach(body, out),
        }
    }
}

fn detach(slot: &mut Stmt, out: &mut Vec<Stmt>) {
    if slot.has_children() {
        out.push(mem::replace(slot, Stmt::Block(Vec::new())));
    }
}

/// Drops nested statements from a heap worklist. Expressions inside them
/// tear themselves down the same way.
impl Drop for Stmt {
    fn drop(&mut self) {
        if !self.has_children() {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.detach_children(&mut pending);
        }
    }
}
