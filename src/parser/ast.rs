// AST (Abstract Syntax Tree) definitions for the lcc front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Data types supported by the language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
}

impl DataType {
    /// Keyword spelling of the type
    pub fn name(self) -> &'static str {
        match self {
            DataType::Int => "int",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add, // +
    Sub, // -
    Eq,  // ==
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Eq => "==",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub param_type: DataType,
}

/// Expressions. Parentheses only group and never get a node of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Ident(String),
    IntLiteral(i64),
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }
}

/// Statements, including function declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    FunctionDecl {
        return_type: DataType,
        name: String,
        param: Option<Param>, // the grammar allows at most one parameter
        body: Vec<Stmt>,
    },
    VarDecl {
        name: String,
        var_type: DataType,
        value: Expr,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    Exit {
        value: Expr,
    },
    ExprStmt {
        expr: Expr,
    },
}

/// Root of the tree: the statements of one source text, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
