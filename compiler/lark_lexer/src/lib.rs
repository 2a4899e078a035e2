//! Scanner for Lark source text.
//!
//! [`lex`] turns a source string into a [`TokenList`] that always ends with
//! an `Eof` token, plus any [`LexError`]s found along the way. Scanning never
//! stops early: a bad character is reported and skipped.
//!
//! # Module Structure
//!
//! - `cursor`: byte-offset cursor with memchr-backed skipping
//! - `keywords`: reserved word lookup
//! - `lex_error`: error types and diagnostic conversion
//! - `scanner`: the token loop

mod cursor;
mod keywords;
mod lex_error;
mod scanner;

use lark_diagnostic::Diagnostic;
use lark_ir::TokenList;
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};

/// Output of one scan.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors converted to diagnostics, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

/// Scan `source` into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let (tokens, errors) = scanner::Scanner::new(source).scan();
    debug!(tokens = tokens.len(), errors = errors.len(), "scan complete");
    LexOutput { tokens, errors }
}
