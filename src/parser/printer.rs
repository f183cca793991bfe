//! Read-only renderings of the AST
//!
//! Two views are provided, neither of which touches the tree:
//! - [`tree_lines`] / [`render_tree`]: an indented node-per-line dump, two
//!   spaces per level, used by `lcc ast` and the explorer's AST pane.
//! - `Display` for [`Expr`], [`Stmt`] and [`Program`]: source-like text with
//!   every binary expression parenthesized so the grouping is explicit.

use crate::parser::ast::*;
use std::fmt;

const INDENT: &str = "  ";

/// One line per node, children indented under their parent.
pub fn tree_lines(program: &Program) -> Vec<String> {
    let mut printer = TreePrinter::default();
    printer.line(0, "Program".to_string());
    for stmt in &program.statements {
        printer.stmt(stmt, 1);
    }
    printer.lines
}

pub fn render_tree(program: &Program) -> String {
    let mut out = tree_lines(program).join("\n");
    out.push('\n');
    out
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
}

impl TreePrinter {
    fn line(&mut self, depth: usize, text: String) {
        self.lines.push(format!("{}{}", INDENT.repeat(depth), text));
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::FunctionDecl {
                return_type,
                name,
                param,
                body,
            } => {
                self.line(depth, format!("FunctionDecl: {name} -> {return_type}"));
                if let Some(param) = param {
                    self.line(
                        depth + 1,
                        format!("Param: {} : {}", param.name, param.param_type),
                    );
                }
                for stmt in body {
                    self.stmt(stmt, depth + 1);
                }
            }
            Stmt::VarDecl {
                name,
                var_type,
                value,
            } => {
                self.line(depth, format!("VarDecl: {name} : {var_type}"));
                self.expr(value, depth + 1);
            }
            Stmt::Assignment { name, value } => {
                self.line(depth, format!("Assignment: {name}"));
                self.expr(value, depth + 1);
            }
            Stmt::Exit { value } => {
                self.line(depth, "Exit".to_string());
                self.expr(value, depth + 1);
            }
            Stmt::ExprStmt { expr } => {
                self.line(depth, "ExprStmt".to_string());
                self.expr(expr, depth + 1);
            }
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match expr {
            Expr::Binary { op, left, right } => {
                self.line(depth, format!("BinaryExpr: {op}"));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            Expr::Ident(name) => self.line(depth, format!("Ident: {name}")),
            Expr::IntLiteral(value) => self.line(depth, format!("IntLiteral: {value}")),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Ident(name) => f.write_str(name),
            Expr::IntLiteral(value) => write!(f, "{value}"),
        }
    }
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match stmt {
        Stmt::FunctionDecl {
            return_type,
            name,
            param,
            body,
        } => {
            write!(f, "{pad}fn {return_type} {name}(")?;
            if let Some(param) = param {
                write!(f, "{} {}", param.param_type, param.name)?;
            }
            writeln!(f, ") {{")?;
            for stmt in body {
                write_stmt(f, stmt, depth + 1)?;
                writeln!(f)?;
            }
            write!(f, "{pad}}}")
        }
        Stmt::VarDecl {
            name,
            var_type,
            value,
        } => write!(f, "{pad}let {name} : {var_type} = {value};"),
        Stmt::Assignment { name, value } => write!(f, "{pad}{name} = {value};"),
        Stmt::Exit { value } => write!(f, "{pad}exit({value});"),
        Stmt::ExprStmt { expr } => write!(f, "{pad}{expr};"),
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn parse(source: &str) -> Program {
        Parser::from_source(source).parse_program().unwrap()
    }

    #[test]
    fn test_tree_lines() {
        let program = parse("fn int main(int n) { let x : int = n + 1; exit(x); }");

        assert_eq!(
            tree_lines(&program),
            vec![
                "Program",
                "  FunctionDecl: main -> int",
                "    Param: n : int",
                "    VarDecl: x : int",
                "      BinaryExpr: +",
                "        Ident: n",
                "        IntLiteral: 1",
                "    Exit",
                "      Ident: x",
            ]
        );
    }

    #[test]
    fn test_render_tree_empty_program() {
        assert_eq!(render_tree(&Program::new()), "Program\n");
    }

    #[test]
    fn test_expr_display_shows_grouping() {
        let program = parse("a - b + c; a == (b - c);");

        assert_eq!(program.statements[0].to_string(), "((a - b) + c);");
        assert_eq!(program.statements[1].to_string(), "(a == (b - c));");
    }

    #[test]
    fn test_source_display() {
        let program = parse("fn int f() { x = 1; fn int g(int y) { exit(y); } } exit(f);");

        assert_eq!(
            program.to_string(),
            "fn int f() {\n  x = 1;\n  fn int g(int y) {\n    exit(y);\n  }\n}\nexit(f);\n"
        );
    }

    #[test]
    fn test_source_display_reparses_to_same_tree() {
        let program = parse("let a : int = 1 - (2 + 3) == 4; fn int id(int v) { v; }");
        let reparsed = parse(&program.to_string());

        assert_eq!(program, reparsed);
    }
}
