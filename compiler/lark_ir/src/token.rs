//! Token types produced by the scanner.

use std::fmt;
use std::ops::Index;

use crate::{Span, Value};

/// Token kinds.
///
/// Fieldless so that a kind fits in one byte and can be used as a bit index
/// (see `TokenSet` in the parser). Literal payloads live on [`Token`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Percent,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Else,
    False,
    For,
    If,
    Null,
    Or,
    Print,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Discriminant as a small integer, used for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in "expected X" messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Minus => "`-`",
            TokenKind::Plus => "`+`",
            TokenKind::Percent => "`%`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Bang => "`!`",
            TokenKind::BangEqual => "`!=`",
            TokenKind::Equal => "`=`",
            TokenKind::EqualEqual => "`==`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEqual => "`>=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEqual => "`<=`",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "`and`",
            TokenKind::Else => "`else`",
            TokenKind::False => "`false`",
            TokenKind::For => "`for`",
            TokenKind::If => "`if`",
            TokenKind::Null => "`null`",
            TokenKind::Or => "`or`",
            TokenKind::Print => "`print`",
            TokenKind::True => "`true`",
            TokenKind::Var => "`var`",
            TokenKind::While => "`while`",
            TokenKind::Eof => "end of file",
        }
    }
}

/// Parsed payload of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(n),
            Literal::Text(s) => Value::Text(s),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => fmt::Display::fmt(&Value::Number(*n), f),
            Literal::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// A token with its kind, source text and location.
///
/// Immutable once the scanner has produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source slice the token was scanned from.
    pub lexeme: String,
    /// Parsed value for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
        }
    }

    /// Attach a parsed literal value.
    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The end-of-input sentinel at the given line and byte offset.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", line, Span::new(offset, offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Ordered token sequence produced by one scan.
///
/// Always terminated by exactly one `Eof` token once the scanner is done;
/// the parser relies on this to never read past the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds in order, mostly for tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
