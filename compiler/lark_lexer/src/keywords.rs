//! Reserved keyword lookup.
//!
//! Keywords are 2-5 ASCII letters; anything outside that length range is an
//! identifier without further comparison.

use lark_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=5).contains(&text.len()) {
        return None;
    }

    match text {
        "and" => Some(TokenKind::And),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "for" => Some(TokenKind::For),
        "if" => Some(TokenKind::If),
        "null" => Some(TokenKind::Null),
        "or" => Some(TokenKind::Or),
        "print" => Some(TokenKind::Print),
        "true" => Some(TokenKind::True),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}
