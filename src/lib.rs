//! # Introduction
//!
//! lcc is the front end of a small compiler: it turns source text for a tiny
//! statement/expression language into an abstract syntax tree. A terminal
//! explorer built with [ratatui](https://docs.rs/ratatui) shows the source
//! side by side with the parsed tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program (AST) → printer / TUI
//! ```
//!
//! 1. [`parser::lexer`] — total tokenizer; unrecognized characters become
//!    `Unknown` tokens instead of errors.
//! 2. [`parser::parse`] — recursive-descent parser; the first violated
//!    expectation aborts with a [`ParseError`].
//! 3. [`parser::printer`] — tree dump and source-like rendering.
//! 4. [`ui`] — ratatui-based explorer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use lcc::parser::ast::{BinOp, Expr, Stmt};
//!
//! let program = lcc::parse("exit(1 + 2);").unwrap();
//! assert_eq!(
//!     program.statements[0],
//!     Stmt::Exit {
//!         value: Expr::binary(BinOp::Add, Expr::IntLiteral(1), Expr::IntLiteral(2)),
//!     }
//! );
//! ```

pub mod parser;
pub mod ui;

pub use parser::{parse, ParseError, ParseErrorKind, Program};
