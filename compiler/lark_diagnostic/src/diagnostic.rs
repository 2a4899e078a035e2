//! The shared diagnostic record.

use std::fmt;

use crate::ErrorCode;

/// Pipeline stage that produced a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lex,
    Parse,
    Runtime,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Lex => "lex",
            Phase::Parse => "parse",
            Phase::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported problem.
///
/// `location` is only set for syntax errors: `at end` or `at '<lexeme>'`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub phase: Phase,
    pub line: u32,
    pub location: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, phase: Phase, line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            phase,
            line,
            location: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Header word(s) between the line tag and the message.
    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Lex | Phase::Parse => "Error",
            Phase::Runtime => "Runtime error",
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.phase == Phase::Runtime
    }
}

/// Renders `[line N] Error: msg`, `[line N] Error at 'x': msg` or
/// `[line N] Runtime error: msg`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.label())?;
        if let Some(location) = &self.location {
            write!(f, " {location}")?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests;
