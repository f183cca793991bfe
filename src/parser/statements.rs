//! Statement parsing implementation
//!
//! This module handles statement dispatch and the non-declaration statements:
//!
//! - Assignments: `x = expr;`
//! - Exit: `exit(expr);`
//! - Expression statements: `expr;`
//!
//! # Grammar
//!
//! ```text
//! statement  ::= function_decl | var_decl | assignment | exit_stmt | expr_stmt
//! assignment ::= identifier "=" expr ";"
//! exit_stmt  ::= "exit" "(" expr ")" ";"
//! expr_stmt  ::= expr ";"
//! ```
//!
//! An identifier starts an assignment only when the token right after it is
//! `=`; otherwise it starts an expression statement.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.nested(|parser| match parser.current().kind {
            TokenKind::Fn => parser.parse_function_decl(),
            TokenKind::Let => parser.parse_var_decl(),
            TokenKind::Ident if parser.peek(1).kind == TokenKind::Eq => parser.parse_assignment(),
            TokenKind::Exit => parser.parse_exit_statement(),
            _ => parser.parse_expression_statement(),
        })
    }

    /// Parse assignment: name = expr;
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_token(TokenKind::Eq, ParseErrorKind::ExpectedEqual)?;
        let value = self.parse_expression()?;
        self.expect_semicolon()?;

        Ok(Stmt::Assignment { name, value })
    }

    /// Parse exit statement: exit(expr);
    fn parse_exit_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // consume 'exit'

        self.expect_lparen()?;
        let value = self.parse_expression()?;
        self.expect_rparen()?;
        self.expect_semicolon()?;

        Ok(Stmt::Exit { value })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Stmt::ExprStmt { expr })
    }
}
