//! Declaration parsing implementation
//!
//! This module handles the two declaration forms of the language:
//!
//! - Function declarations: `fn int name(int param) { ... }`
//! - Variable declarations: `let name : int = expr;`
//!
//! # Grammar
//!
//! ```text
//! function_decl ::= "fn" type identifier "(" [ type identifier ] ")" "{" statement* "}"
//! var_decl      ::= "let" identifier ":" type "=" expr ";"
//! type          ::= "int"
//! ```
//!
//! A function takes at most one parameter. All parsing methods are
//! implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{TokenCategory, TokenKind};
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse function declaration; the caller has seen `fn`
    pub(crate) fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // consume 'fn'

        let return_type = self.expect_data_type()?;
        let name = self.expect_identifier()?;

        self.expect_lparen()?;
        let param = self.parse_optional_param()?;
        self.expect_rparen()?;

        self.expect_lbrace()?;
        let body = self.parse_block_statements()?;
        self.expect_rbrace()?;

        Ok(Stmt::FunctionDecl {
            return_type,
            name,
            param,
            body,
        })
    }

    /// Parse the single optional `type name` parameter
    fn parse_optional_param(&mut self) -> Result<Option<Param>, ParseError> {
        if !self.check_category(TokenCategory::DataType) {
            return Ok(None);
        }

        let param_type = self.expect_data_type()?;
        let name = self.expect_identifier()?;
        Ok(Some(Param { name, param_type }))
    }

    /// Parse variable declaration: let name : type = expr;
    pub(crate) fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(TokenKind::Let, ParseErrorKind::ExpectedLetKeyword)?;
        let name = self.expect_identifier()?;
        self.expect_token(TokenKind::Colon, ParseErrorKind::ExpectedColon)?;
        let var_type = self.expect_data_type()?;
        self.expect_token(TokenKind::Eq, ParseErrorKind::ExpectedEqual)?;
        let value = self.parse_expression()?;
        self.expect_semicolon()?;

        Ok(Stmt::VarDecl {
            name,
            var_type,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseErrorKind, Parser, Side};

    fn parse_err(source: &str) -> ParseErrorKind {
        Parser::from_source(source).parse_program().unwrap_err().kind
    }

    #[test]
    fn test_function_without_param() {
        let program = Parser::from_source("fn int zero() { }")
            .parse_program()
            .unwrap();

        assert_eq!(
            program.statements,
            vec![Stmt::FunctionDecl {
                return_type: DataType::Int,
                name: "zero".to_string(),
                param: None,
                body: vec![],
            }]
        );
    }

    #[test]
    fn test_nested_function() {
        let source = "fn int outer() { fn int inner(int n) { exit(n); } }";
        let program = Parser::from_source(source).parse_program().unwrap();

        match &program.statements[0] {
            Stmt::FunctionDecl { body, .. } => {
                assert!(matches!(
                    &body[0],
                    Stmt::FunctionDecl { name, param: Some(_), .. } if name == "inner"
                ));
            }
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_function_errors() {
        assert_eq!(parse_err("fn main() {}"), ParseErrorKind::ExpectedDataType);
        assert_eq!(parse_err("fn int () {}"), ParseErrorKind::ExpectedIdentifier);
        assert_eq!(
            parse_err("fn int main {}"),
            ParseErrorKind::ExpectedParen(Side::Open)
        );
        assert_eq!(
            parse_err("fn int main(int a, int b) {}"),
            ParseErrorKind::ExpectedParen(Side::Close)
        );
        assert_eq!(
            parse_err("fn int main(x) {}"),
            ParseErrorKind::ExpectedParen(Side::Close)
        );
        assert_eq!(parse_err("fn int main(int) {}"), ParseErrorKind::ExpectedIdentifier);
        assert_eq!(
            parse_err("fn int main() exit(0);"),
            ParseErrorKind::ExpectedBrace(Side::Open)
        );
        assert_eq!(
            parse_err("fn int main() { exit(0);"),
            ParseErrorKind::ExpectedBrace(Side::Close)
        );
    }

    #[test]
    fn test_var_decl_errors() {
        assert_eq!(parse_err("let : int = 1;"), ParseErrorKind::ExpectedIdentifier);
        assert_eq!(parse_err("let x int = 1;"), ParseErrorKind::ExpectedColon);
        assert_eq!(parse_err("let x : y = 1;"), ParseErrorKind::ExpectedDataType);
        assert_eq!(parse_err("let x : int 5;"), ParseErrorKind::ExpectedEqual);
        assert_eq!(parse_err("let x : int = 5"), ParseErrorKind::ExpectedSemicolon);
        assert_eq!(
            parse_err("let x : int = ;"),
            ParseErrorKind::UnexpectedTokenInExpression
        );
    }
}
