use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{ast::Expr, ast::Stmt, expressions::Identifier};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

/// `return [<value>];` - the value is absent for a bare `return`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The opening `{`
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
