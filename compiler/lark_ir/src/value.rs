//! Runtime values.
//!
//! Lark has exactly four kinds of value. There are no lists, objects or
//! functions, so every value is a plain owned datum and `Clone` is the only
//! sharing mechanism.

use std::fmt;

/// A dynamically-typed runtime value.
///
/// `PartialEq` is the language's `==`: values of different variants are
/// never equal and `Text` compares by content. Numbers compare by bit
/// pattern with every `NaN` treated as one value, so `NaN == NaN` holds and
/// `0 == -0` does not.
#[derive(Clone, Debug, Default)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    #[default]
    Null,
}

impl Value {
    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Truthiness used by `if`, `while`, `!`, `and` and `or`.
    ///
    /// `null`, `false`, `0`, `-0` and `""` are falsy; everything else
    /// (including `NaN`) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Text(s) => !s.is_empty(),
        }
    }

}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => same_number(*a, *b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

#[inline]
fn same_number(a: f64, b: f64) -> bool {
    if a.is_nan() {
        b.is_nan()
    } else {
        a.to_bits() == b.to_bits()
    }
}

/// Canonical text form, as written by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // f64's Display prints integral values without a fraction and
            // never switches to exponent notation.
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
