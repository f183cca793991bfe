//! lcc source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`printer`]: read-only renderings of a parsed tree
//!
//! # Language
//!
//! - Types: `int` only
//! - Statements: `fn` declarations (zero or one parameter), `let`
//!   declarations, assignments, `exit(expr);`, expression statements
//! - Expressions: integer literals, identifiers, `+`, `-`, `==`, parentheses
//!
//! `if` and float literals are recognized by the lexer but no grammar rule
//! accepts them yet.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod printer;

mod declarations;
mod expressions;
mod statements;

pub use ast::Program;
pub use parse::{ParseError, ParseErrorKind, Parser};

/// Tokenize and parse `source` in one call.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::from_source(source).parse_program()
}
