//! Syntax tree types.
//!
//! Two closed sum types: [`Expr`] and [`Stmt`]. Each node owns its children
//! through `Box`/`Vec`, so a program is a forest of strict trees with no
//! sharing. Consumers walk them with exhaustive `match`.
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes and identifier references
//! - `operators`: Unary, binary and logical operators
//! - `stmt`: Statement nodes
//! - `printer`: Parenthesized S-expression rendering

mod expr;
mod operators;
pub mod printer;
mod stmt;

pub use expr::{Expr, Ident};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::Stmt;

#[cfg(test)]
mod tests;
