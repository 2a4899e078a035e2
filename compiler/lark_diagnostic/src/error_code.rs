//! Error codes for all interpreter diagnostics.
//!
//! The first digit of a code names the phase that raised it.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Undefined variable
    E6002,
    /// Assignment to undeclared variable
    E6003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "string literal is missing its closing quote",
            ErrorCode::E0002 => "character is not part of the language",
            ErrorCode::E1001 => "a required token is missing",
            ErrorCode::E1002 => "an expression was expected here",
            ErrorCode::E1003 => "only a variable can appear on the left of `=`",
            ErrorCode::E6001 => "operator applied to operands of the wrong type",
            ErrorCode::E6002 => "variable read before it was declared",
            ErrorCode::E6003 => "variable assigned before it was declared",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
