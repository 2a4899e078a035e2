//! Parse error types.
//!
//! A syntax error aborts the statement being parsed and travels up to the
//! statement loop as `Err(ParseError)`.

use std::fmt;

use lark_diagnostic::{Diagnostic, ErrorCode, Phase};
use lark_ir::{Span, Token, TokenKind};

/// Where a syntax error was detected, as shown after `Error`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorLocation {
    /// The offending token was `Eof`.
    End,
    /// The offending token's lexeme.
    Lexeme(String),
}

impl ErrorLocation {
    fn of(token: &Token) -> Self {
        if token.is_eof() {
            ErrorLocation::End
        } else {
            ErrorLocation::Lexeme(token.lexeme.clone())
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::End => f.write_str("at end"),
            ErrorLocation::Lexeme(lexeme) => write!(f, "at '{lexeme}'"),
        }
    }
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A required token is missing, e.g. "expected `;` after value".
    #[error("expected {} {context}", expected.display_name())]
    ExpectedToken {
        expected: TokenKind,
        context: &'static str,
    },

    #[error("expected expression")]
    ExpectedExpression,

    /// Left side of `=` is not a bare variable.
    #[error("cannot assign to a non-variable target")]
    InvalidAssignmentTarget,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1003,
        }
    }
}

/// A syntax error reported at a specific token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("[line {line}] Error {at}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    pub span: Span,
    pub at: ErrorLocation,
}

impl ParseError {
    fn at_token(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError {
            kind,
            line: token.line,
            span: token.span,
            at: ErrorLocation::of(token),
        }
    }

    #[cold]
    pub fn expected_token(expected: TokenKind, context: &'static str, found: &Token) -> Self {
        Self::at_token(ParseErrorKind::ExpectedToken { expected, context }, found)
    }

    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        Self::at_token(ParseErrorKind::ExpectedExpression, found)
    }

    /// Reported at the `=` token.
    #[cold]
    pub fn invalid_assignment_target(equals: &Token) -> Self {
        Self::at_token(ParseErrorKind::InvalidAssignmentTarget, equals)
    }

    /// `at end` or `at '<lexeme>'`.
    pub fn location(&self) -> String {
        self.at.to_string()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind.code(), Phase::Parse, self.line, self.kind.to_string())
            .with_location(self.location())
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        error.to_diagnostic()
    }
}
