use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding power, lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -X or !X
    Call,        // myFunction(X)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type InfixHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.infix(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    parser.infix(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Integer, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Not, parse_prefix_expr);
    parser.prefix(TokenKind::Dash, parse_prefix_expr);
    parser.prefix(TokenKind::OpenParen, parse_grouped_expr);
    parser.prefix(TokenKind::If, parse_if_expr);
    parser.prefix(TokenKind::Fn, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so each parser owns its own
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
