//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one syntactic category:
//!
//! - `expr`: assignment down to primary expressions
//! - `stmt`: statements, including the `for` desugaring

mod expr;
mod stmt;
