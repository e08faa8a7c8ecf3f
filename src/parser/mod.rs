//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, blocks, expression statements)
//! - Expression parsing (prefix and infix operators, `if`, function literals, calls)
//! - Error recovery and reporting
//!
//! Prefix handlers start an expression from the current token; infix
//! handlers extend an expression that has already been parsed.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
