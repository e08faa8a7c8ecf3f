use std::fmt::{self, Display};

use super::{
    expressions::{
        BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
        IntegerLiteral, PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Root of the tree: every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// The literal of the first statement's token, or an empty string.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.literal,
            Stmt::Return(stmt) => &stmt.token.literal,
            Stmt::Expression(stmt) => &stmt.token.literal,
            Stmt::Block(stmt) => &stmt.token.literal,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => Display::fmt(stmt, f),
            Stmt::Return(stmt) => Display::fmt(stmt, f),
            Stmt::Expression(stmt) => Display::fmt(stmt, f),
            Stmt::Block(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => &expr.token.literal,
            Expr::Integer(expr) => &expr.token.literal,
            Expr::Boolean(expr) => &expr.token.literal,
            Expr::Prefix(expr) => &expr.token.literal,
            Expr::Infix(expr) => &expr.token.literal,
            Expr::If(expr) => &expr.token.literal,
            Expr::Function(expr) => &expr.token.literal,
            Expr::Call(expr) => &expr.token.literal,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => Display::fmt(expr, f),
            Expr::Integer(expr) => Display::fmt(expr, f),
            Expr::Boolean(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Infix(expr) => Display::fmt(expr, f),
            Expr::If(expr) => Display::fmt(expr, f),
            Expr::Function(expr) => Display::fmt(expr, f),
            Expr::Call(expr) => Display::fmt(expr, f),
        }
    }
}
