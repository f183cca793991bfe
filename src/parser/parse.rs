//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, the cursor primitives, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, cursor primitives, and coordination
//! - `declarations`: `fn` and `let` declarations
//! - `statements`: statement dispatch, assignments, `exit`, expression statements
//! - `expressions`: expressions, loosest binding (`==`) first
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! There is no error recovery: the first violated expectation aborts the parse
//! and no partial tree is returned.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenCategory, TokenKind};
use std::fmt;

/// Which half of a bracket pair was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Open,
    Close,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Open => f.write_str("opening"),
            Side::Close => f.write_str("closing"),
        }
    }
}

/// What the parser expected when it gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected 'let'")]
    ExpectedLetKeyword,
    #[error("expected ':'")]
    ExpectedColon,
    #[error("expected ';'")]
    ExpectedSemicolon,
    #[error("expected data type ('int')")]
    ExpectedDataType,
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected '='")]
    ExpectedEqual,
    #[error("expected {0} parenthesis")]
    ExpectedParen(Side),
    #[error("expected {0} brace")]
    ExpectedBrace(Side),
    #[error("unexpected token in expression")]
    UnexpectedTokenInExpression,
    #[error("integer literal out of range")]
    IntegerOutOfRange,
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Parse error at line {}, column {}: {kind}, found {found}",
    .location.line,
    .location.column
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Description of the offending token
    pub found: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            kind,
            found: token.to_string(),
            location: token.location,
        }
    }
}

/// Deepest statement/expression nesting the parser descends into
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive descent parser for lcc
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Statements and expressions currently being parsed
    depth: usize,
    end_of_stream: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end_loc = tokens
            .last()
            .map(|t| SourceLocation::new(t.location.line, t.location.column + t.width()))
            .unwrap_or(SourceLocation::new(1, 1));
        Self {
            tokens,
            position: 0,
            depth: 0,
            end_of_stream: Token::end_of_stream(end_loc),
        }
    }

    /// Tokenize `source` and wrap the result in a parser.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source).tokenize())
    }

    /// Parse the entire program (a sequence of statements)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            program.statements.push(self.parse_statement()?);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    /// Token at cursor + `offset`, or the end-of-stream sentinel past the end.
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.position + offset)
            .unwrap_or(&self.end_of_stream)
    }

    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        let token = self.current();
        token.kind == kind && !token.is_end_of_stream()
    }

    pub(crate) fn check_category(&self, category: TokenCategory) -> bool {
        self.current().category() == category
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        error: ParseErrorKind,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(error))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.expect_token(TokenKind::Ident, ParseErrorKind::ExpectedIdentifier)
            .map(|token| token.value)
    }

    pub(crate) fn expect_data_type(&mut self) -> Result<DataType, ParseError> {
        if !self.check_category(TokenCategory::DataType) {
            return Err(self.error(ParseErrorKind::ExpectedDataType));
        }
        let data_type = match self.current().kind {
            TokenKind::Int => DataType::Int,
            _ => return Err(self.error(ParseErrorKind::ExpectedDataType)),
        };
        self.advance();
        Ok(data_type)
    }

    pub(crate) fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Semicolon, ParseErrorKind::ExpectedSemicolon)
            .map(drop)
    }

    pub(crate) fn expect_lparen(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::LParen, ParseErrorKind::ExpectedParen(Side::Open))
            .map(drop)
    }

    pub(crate) fn expect_rparen(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::RParen, ParseErrorKind::ExpectedParen(Side::Close))
            .map(drop)
    }

    pub(crate) fn expect_lbrace(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::LBrace, ParseErrorKind::ExpectedBrace(Side::Open))
            .map(drop)
    }

    pub(crate) fn expect_rbrace(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::RBrace, ParseErrorKind::ExpectedBrace(Side::Close))
            .map(drop)
    }

    /// Run `parse` one nesting level deeper. Past [`MAX_NESTING_DEPTH`] the
    /// parse fails with `NestingTooDeep` at the current token.
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ParseErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Build an error pointing at the current token.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current())
    }
}
