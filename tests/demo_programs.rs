// Parse the sample programs under demos/

use lcc::parser::ast::*;
use lcc::parser::parse::{ParseErrorKind, Side};
use lcc::parser::printer::render_tree;
use std::fs;
use std::path::Path;

fn read_demo(name: &str) -> String {
    let path = Path::new("demos").join(name);
    fs::read_to_string(&path).expect("Failed to read demo file")
}

#[test]
fn test_basics_demo() {
    let program = lcc::parse(&read_demo("basics.lcc")).expect("Parsing failed");

    assert_eq!(program.len(), 5);
    assert!(matches!(&program.statements[0], Stmt::VarDecl { name, .. } if name == "x"));
    assert!(matches!(&program.statements[2], Stmt::Assignment { name, .. } if name == "y"));
    assert!(matches!(
        &program.statements[3],
        Stmt::ExprStmt {
            expr: Expr::Binary { op: BinOp::Eq, .. }
        }
    ));
    assert_eq!(
        program.statements[4],
        Stmt::Exit {
            value: Expr::ident("y"),
        }
    );
}

#[test]
fn test_functions_demo() {
    let program = lcc::parse(&read_demo("functions.lcc")).expect("Parsing failed");

    let names: Vec<&str> = program
        .statements
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::FunctionDecl { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["zero", "inc"]);

    let tree = render_tree(&program);
    assert!(tree.starts_with("Program\n  FunctionDecl: zero -> int\n    Exit\n"));
    assert!(tree.contains("  FunctionDecl: inc -> int\n    Param: n : int\n"));
}

#[test]
fn test_printed_demo_reparses() {
    for name in ["basics.lcc", "functions.lcc"] {
        let program = lcc::parse(&read_demo(name)).expect("Parsing failed");
        let reparsed = lcc::parse(&program.to_string()).expect("Reparsing failed");
        assert_eq!(program, reparsed, "{}", name);
    }
}

#[test]
fn test_missing_equal_demo() {
    let err = lcc::parse(&read_demo("missing_equal.lcc")).expect_err("Parsing should fail");

    assert_eq!(err.kind, ParseErrorKind::ExpectedEqual);
    assert_eq!(err.location, SourceLocation::new(2, 13));
}

#[test]
fn test_unclosed_body_demo() {
    let err = lcc::parse(&read_demo("unclosed_body.lcc")).expect_err("Parsing should fail");

    assert_eq!(err.kind, ParseErrorKind::ExpectedBrace(Side::Close));
}
