//! Statement parsing.

use lark_ir::{Expr, Ident, Stmt, TokenKind};
use lark_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement. `var` is accepted anywhere a statement is.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let token = self.cursor.current();
        trace!(kind = ?token.kind, line = token.line, "statement");

        match token.kind {
            TokenKind::Print => {
                self.cursor.advance();
                self.parse_print()
            }
            TokenKind::Var => {
                self.cursor.advance();
                self.parse_var()
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.parse_block()?))
            }
            TokenKind::If => {
                self.cursor.advance();
                self.parse_if()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.parse_while()
            }
            TokenKind::For => {
                self.cursor.advance();
                self.parse_for()
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon, "after value")?;
        Ok(Stmt::Print(value))
    }

    /// `var` already consumed. The initializer is mandatory.
    fn parse_var(&mut self) -> Result<Stmt, ParseError> {
        let name = self.cursor.expect(TokenKind::Identifier, "after `var`")?;
        let name = Ident::new(name.lexeme.as_str(), name.line);
        self.cursor.expect(TokenKind::Equal, "after variable name")?;
        let initializer = self.parse_expr()?;
        self.cursor
            .expect(TokenKind::Semicolon, "after variable declaration")?;
        Ok(Stmt::var(name, initializer))
    }

    /// `{` already consumed.
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor.expect(TokenKind::RightBrace, "after block")?;
        Ok(statements)
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::LeftParen, "after `if`")?;
        let condition = self.parse_expr()?;
        self.cursor.expect(TokenKind::RightParen, "after if condition")?;

        let then_branch = self.parse_statement()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(Stmt::if_else(condition, then_branch, else_branch))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::LeftParen, "after `while`")?;
        let condition = self.parse_expr()?;
        self.cursor
            .expect(TokenKind::RightParen, "after while condition")?;
        let body = self.parse_statement()?;
        Ok(Stmt::while_loop(condition, body))
    }

    /// Desugars `for (init; cond; post) body` into
    /// `{ init; while (cond) { body; post; } }`.
    ///
    /// A missing condition is `true`; without `post` the body is used as is;
    /// without `init` there is no outer block.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::LeftParen, "after `for`")?;

        let init = if self.cursor.eat(TokenKind::Semicolon) {
            None
        } else if self.cursor.eat(TokenKind::Var) {
            Some(self.parse_var()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            Expr::literal(true)
        } else {
            self.parse_expr()?
        };
        self.cursor
            .expect(TokenKind::Semicolon, "after loop condition")?;

        let post = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect(TokenKind::RightParen, "after for clauses")?;

        let mut body = self.parse_statement()?;
        if let Some(post) = post {
            body = Stmt::Block(vec![body, Stmt::Expression(post)]);
        }
        let looped = Stmt::while_loop(condition, body);

        Ok(match init {
            Some(init) => Stmt::Block(vec![init, looped]),
            None => looped,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        self.cursor
            .expect(TokenKind::Semicolon, "after expression")?;
        Ok(Stmt::Expression(expr))
    }
}

#[cfg(test)]
mod tests;
