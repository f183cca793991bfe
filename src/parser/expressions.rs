//! Expression parsing implementation
//!
//! Expressions are parsed by recursive descent, one method per precedence
//! level, loosest first:
//!
//! ```text
//! expr     ::= equality
//! equality ::= additive ( "==" additive )?
//! additive ::= term ( ( "+" | "-" ) term )*
//! term     ::= factor
//! factor   ::= int_literal | identifier | "(" expr ")"
//! ```
//!
//! `==` is non-associative (at most one per expression); `+` and `-` fold to
//! the left. All parsing methods are implemented as `pub(crate)` methods on
//! the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{TokenCategory, TokenKind};
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_equality)
    }

    /// Parse equality (==)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_additive()?;

        if self.match_token(TokenKind::EqEq) {
            let right = self.parse_additive()?;
            return Ok(Expr::binary(BinOp::Eq, left, right));
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = if self.match_token(TokenKind::Plus) {
                BinOp::Add
            } else if self.match_token(TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };

            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    // TODO: '*' and '/' belong here once the lexer has tokens for them.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_factor()
    }

    /// Parse factor: literal, identifier, or parenthesized expression
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.current().category() {
            TokenCategory::Literal => self.parse_literal(),
            TokenCategory::Identifier => Ok(Expr::Ident(self.advance().value)),
            _ if self.match_token(TokenKind::LParen) => {
                let expr = self.parse_expression()?;
                self.expect_rparen()?;
                Ok(expr)
            }
            _ => Err(self.error(ParseErrorKind::UnexpectedTokenInExpression)),
        }
    }

    /// Parse an integer literal; floats have no expression form
    fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        if !self.check(TokenKind::IntLiteral) {
            return Err(self.error(ParseErrorKind::UnexpectedTokenInExpression));
        }
        let value = self
            .current()
            .value
            .parse::<i64>()
            .map_err(|_| self.error(ParseErrorKind::IntegerOutOfRange))?;
        self.advance();
        Ok(Expr::IntLiteral(value))
    }
}
