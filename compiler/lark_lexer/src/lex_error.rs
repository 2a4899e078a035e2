//! Lexer error types.
//!
//! Lexical errors never stop the scan: the scanner records them and keeps
//! going, so one pass can report every bad character in a file.

use lark_diagnostic::{Diagnostic, ErrorCode, Phase};
use lark_ir::Span;

/// A lexer error located by line and byte span.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Line the scanner was on when it detected the error.
    pub line: u32,
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"`; reported where the input ran out.
    #[error("unterminated string")]
    UnterminatedString,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
        }
    }
}

impl LexError {
    #[cold]
    pub fn unterminated_string(line: u32, span: Span) -> Self {
        LexError {
            line,
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unexpected_character(c: char, line: u32, span: Span) -> Self {
        LexError {
            line,
            span,
            kind: LexErrorKind::UnexpectedCharacter(c),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind.code(), Phase::Lex, self.line, self.kind.to_string())
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        error.to_diagnostic()
    }
}
