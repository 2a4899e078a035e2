//! Recursive descent parser for Lark.
//!
//! Turns a [`TokenList`] into a sequence of [`Stmt`]s. One token of
//! lookahead, no backtracking. Precedence, lowest first:
//!
//! ```text
//! assignment  →  or  →  and  →  == !=  →  < <= > >=  →  + -  →  * / %  →  ! -  →  primary
//! ```
//!
//! By default the parser stops at the first syntax error and returns the
//! statements parsed before it. With [`ParseOptions::recover`] it skips to
//! the next statement boundary and keeps collecting errors.
//!
//! # Module Structure
//!
//! - `cursor`: token navigation and `expect`
//! - `error`: `ParseError` and diagnostic conversion
//! - `recovery`: `TokenSet` and statement-boundary synchronization
//! - `grammar`: expression and statement productions

mod cursor;
mod error;
mod grammar;
mod recovery;

use lark_diagnostic::Diagnostic;
use lark_ir::{Stmt, TokenKind, TokenList};
use tracing::debug;

pub use cursor::Cursor;
pub use error::{ErrorLocation, ParseError, ParseErrorKind};
pub use recovery::{TokenSet, STMT_START};

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resynchronize after a syntax error instead of stopping.
    pub recover: bool,
}

/// Output of one parse.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state: a cursor over the token stream.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
        }
    }

    /// Parse top-level statements until `Eof`.
    pub fn parse_program(&mut self, options: ParseOptions) -> ParseOutput {
        let mut output = ParseOutput::default();

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => output.statements.push(stmt),
                Err(error) => {
                    debug!(line = error.line, "syntax error: {}", error.kind);
                    output.errors.push(error);
                    if !options.recover {
                        break;
                    }
                    // Always make progress. A lone `;` is its own boundary.
                    if self.cursor.position() == start
                        && self.cursor.advance().kind == TokenKind::Semicolon
                    {
                        continue;
                    }
                    recovery::synchronize(&mut self.cursor);
                }
            }
        }

        output
    }
}

/// Parse with default options: stop at the first syntax error.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    parse_with_options(tokens, ParseOptions::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len(), recover = options.recover))]
pub fn parse_with_options(tokens: &TokenList, options: ParseOptions) -> ParseOutput {
    let output = Parser::new(tokens).parse_program(options);
    debug!(
        statements = output.statements.len(),
        errors = output.errors.len(),
        "parse complete"
    );
    output
}
