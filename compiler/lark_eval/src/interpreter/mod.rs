//! Tree-walking interpreter.
//!
//! Walks statements in order against one [`Environment`]. Expressions are
//! evaluated depth-first, left operand before right. The first runtime error
//! stops execution and is returned to the caller.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;

use lark_ir::{Expr, LogicalOp, Stmt};
use lark_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::environment::{AssignError, Environment};
use crate::errors::{undeclared_assignment, undefined_variable, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;
use crate::EvalOutput;

/// Interpreter state: the variable store and the output sink.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Flat scoping, output to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute a program and package the outcome.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn run(&mut self, statements: &[Stmt]) -> EvalOutput {
        let error = self.interpret(statements).err();
        if let Some(error) = &error {
            debug!(line = error.line, "runtime error: {}", error.kind);
        }
        EvalOutput { error }
    }

    /// Execute statements in order, stopping at the first runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Execute one statement.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested blocks and branches
    /// don't overflow the native stack.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        trace!(kind = stmt.kind_name(), "execute");

        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = self.evaluate(initializer)?;
                self.env.define(&name.name, value);
            }
            Stmt::Block(statements) => {
                let mut scoped = self.scoped();
                scoped.interpret(statements)?;
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
            }
        }
        Ok(())
    }

    /// Evaluate one expression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, line, operand } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(*op, &operand).map_err(|kind| EvalError::new(kind, *line))
            }
            Expr::Binary {
                left,
                op,
                line,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, right, *op).map_err(|kind| EvalError::new(kind, *line))
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                // The deciding operand is the result, not a coerced boolean.
                let decided = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Assign { target, value } => {
                let value = self.evaluate(value)?;
                match self.env.assign(&target.name, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => {
                        Err(undeclared_assignment(&target.name, target.line))
                    }
                }
            }
            Expr::Variable(ident) => self
                .env
                .lookup(&ident.name)
                .cloned()
                .ok_or_else(|| undefined_variable(&ident.name, ident.line)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
