//! Lark IR - shared data types for the Lark pipeline.
//!
//! This crate holds everything that crosses a stage boundary:
//! - Spans for source locations
//! - Tokens and `TokenList` for scanner output
//! - The runtime `Value` type (also carried by literal nodes)
//! - AST nodes (`Expr`, `Stmt`) and the S-expression printer
//!
//! Every stage depends on this crate. Its only dependency is `lark_stack`,
//! used by the printer and by the tree's `Drop` to handle deep nesting.

pub mod ast;
mod span;
mod token;
mod value;

pub use ast::{BinaryOp, Expr, Ident, LogicalOp, Stmt, UnaryOp};
pub use span::Span;
pub use token::{Literal, Token, TokenKind, TokenList};
pub use value::Value;
