//! Single-pass scanner.
//!
//! Produces tokens and errors side by side. A token's line is the line the
//! scanner is on when the token ends, so a string spanning several lines
//! reports the line of its closing quote.

use lark_ir::{Literal, Span, Token, TokenKind, TokenList};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;

pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Byte offset where the token being scanned started.
    start: usize,
    line: u32,
    tokens: TokenList,
    errors: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            // Rough guess: one token per four bytes of source.
            tokens: TokenList::with_capacity(source.len() / 4 + 1),
            errors: Vec::new(),
        }
    }

    /// Scan the whole input. Always ends the token list with `Eof`.
    pub(crate) fn scan(mut self) -> (TokenList, Vec<LexError>) {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        let end = u32::try_from(self.cursor.pos()).unwrap_or(u32::MAX);
        self.tokens.push(Token::eof(self.line, end));
        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            '(' => self.add(TokenKind::LeftParen),
            ')' => self.add(TokenKind::RightParen),
            '{' => self.add(TokenKind::LeftBrace),
            '}' => self.add(TokenKind::RightBrace),
            ',' => self.add(TokenKind::Comma),
            '.' => self.add(TokenKind::Dot),
            '-' => self.add(TokenKind::Minus),
            '+' => self.add(TokenKind::Plus),
            '%' => self.add(TokenKind::Percent),
            ';' => self.add(TokenKind::Semicolon),
            '*' => self.add(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.eat_until_newline_or_eof();
                } else {
                    self.add(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_ident_start(c) => self.identifier(),
            c => {
                let span = self.span();
                self.errors
                    .push(LexError::unexpected_character(c, self.line, span));
            }
        }
    }

    fn string(&mut self) {
        let (newlines, closed) = self.cursor.eat_until_quote();
        self.line += newlines;

        if !closed {
            let span = self.span();
            self.errors.push(LexError::unterminated_string(self.line, span));
            return;
        }

        // Closing quote.
        self.cursor.advance();
        let lexeme = self.cursor.slice_from(self.start);
        let content = &lexeme[1..lexeme.len() - 1];
        let literal = Literal::Text(content.to_owned());
        self.add_literal(TokenKind::String, literal);
    }

    fn number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // A fraction needs at least one digit after the dot: `7.` is `7` `.`.
        if self.cursor.current() == '.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        // Digits with an optional fraction always parse.
        let value = self
            .cursor
            .slice_from(self.start)
            .parse::<f64>()
            .unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }

    #[inline]
    fn span(&self) -> Span {
        Span::from_offsets(self.start, self.cursor.pos())
    }

    fn add_either(&mut self, second: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(second) {
            matched
        } else {
            single
        };
        self.add(kind);
    }

    fn add(&mut self, kind: TokenKind) {
        let lexeme = self.cursor.slice_from(self.start);
        let token = Token::new(kind, lexeme, self.line, self.span());
        self.tokens.push(token);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.cursor.slice_from(self.start);
        let token = Token::new(kind, lexeme, self.line, self.span()).with_literal(literal);
        self.tokens.push(token);
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
