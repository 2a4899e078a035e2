//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after
//! errors. Only used when recovery is switched on.

use lark_ir::TokenKind;

use crate::cursor::Cursor;

// TokenSet uses a u64 bitset, so all discriminant indices must be < 64.
const _: () = assert!(
    TokenKind::COUNT <= 64,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds using bitset representation for O(1) membership
/// testing. Each bit corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Tokens that can only begin a new statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::LeftBrace);

/// Skip tokens until just after a `;`, or until a token in `STMT_START`
/// or `Eof`.
///
/// Returns `true` if a synchronization point was found before `Eof`.
pub fn synchronize(cursor: &mut Cursor<'_>) -> bool {
    while !cursor.is_at_end() {
        if cursor.eat(TokenKind::Semicolon) || STMT_START.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}
