//! Expression parsing.
//!
//! Binary levels are left-associative loops, except multiplicative, which
//! recurses on its right operand: `a / b / c` is `a / (b / c)`.

use lark_ir::{BinaryOp, Expr, Ident, LogicalOp, TokenKind, UnaryOp, Value};
use lark_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

const EQUALITY: &[BinaryOp] = &[BinaryOp::Eq, BinaryOp::NotEq];
const COMPARISON: &[BinaryOp] = &[BinaryOp::Gt, BinaryOp::GtEq, BinaryOp::Lt, BinaryOp::LtEq];
const ADDITIVE: &[BinaryOp] = &[BinaryOp::Add, BinaryOp::Sub];
const MULTIPLICATIVE: &[BinaryOp] = &[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod];

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `name = value`. The value is parsed at `or` level, so assignment
    /// does not chain.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;

        if self.cursor.check(TokenKind::Equal) {
            let equals = self.cursor.advance();
            let Some(ident) = target.as_variable().cloned() else {
                return Err(ParseError::invalid_assignment_target(equals));
            };
            let value = self.parse_or()?;
            return Ok(Expr::assign(ident, value));
        }

        Ok(target)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.eat(TokenKind::Or) {
            let right = self.parse_and()?;
            left = Expr::logical(left, LogicalOp::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.cursor.eat(TokenKind::And) {
            let right = self.parse_equality()?;
            left = Expr::logical(left, LogicalOp::And, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some((op, line)) = self.eat_binary_op(EQUALITY) {
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, line, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some((op, line)) = self.eat_binary_op(COMPARISON) {
            let right = self.parse_additive()?;
            left = Expr::binary(left, op, line, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some((op, line)) = self.eat_binary_op(ADDITIVE) {
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, line, right);
        }
        Ok(left)
    }

    /// Right-recursive: the right operand is a whole multiplicative
    /// expression.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_unary()?;
        if let Some((op, line)) = self.eat_binary_op(MULTIPLICATIVE) {
            let right = ensure_sufficient_stack(|| self.parse_multiplicative())?;
            return Ok(Expr::binary(left, op, line, right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        if let Some(op) = UnaryOp::from_token(token.kind) {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, token.line, operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::Number | TokenKind::String => {
                let value = token.literal.clone().map_or(Value::Null, Value::from);
                Expr::Literal(value)
            }
            TokenKind::True => Expr::literal(true),
            TokenKind::False => Expr::literal(false),
            TokenKind::Null => Expr::Literal(Value::Null),
            TokenKind::Identifier => Expr::Variable(Ident::new(token.lexeme.as_str(), token.line)),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RightParen, "after expression")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(ParseError::expected_expression(token)),
        };
        self.cursor.advance();
        Ok(expr)
    }

    /// Consume the current token if it is one of `ops`, returning the
    /// operator and its line.
    fn eat_binary_op(&mut self, ops: &[BinaryOp]) -> Option<(BinaryOp, u32)> {
        let token = self.cursor.current();
        let op = BinaryOp::from_token(token.kind)?;
        if ops.contains(&op) {
            self.cursor.advance();
            Some((op, token.line))
        } else {
            None
        }
    }
}
